use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized outcome of a net cost calculation
///
/// Every field is rounded to 4 fractional digits on its own;
/// `total_credits` is the sum of the already rounded credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostResult {
    pub purchase_value: Decimal,
    pub icms_credit: Decimal,
    pub pis_credit: Decimal,
    pub cofins_credit: Decimal,
    pub total_credits: Decimal,
    pub net_cost: Decimal,
}
