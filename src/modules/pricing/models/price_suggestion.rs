use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Suggested minimum sale price for a net cost and a desired margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    pub net_cost: Decimal,
    /// Desired profit margin (%) applied on top of the net cost
    pub margin_percent: Decimal,
    pub sale_price: Decimal,
}
