use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{percent_to_fraction, round_amount};
use crate::modules::costs::models::CostResult;
use crate::modules::pricing::models::PriceSuggestion;

/// PricingAdvisor derives a suggested minimum sale price from a net cost
pub struct PricingAdvisor;

impl PricingAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// sale_price = round(net_cost × (1 + margin_percent / 100), 4)
    ///
    /// Signs are not checked: a negative cost or margin is computed as is.
    /// `|net_cost|` is expected within `core::input::MAX_AMOUNT` and the
    /// margin within 1000%, so the product cannot overflow.
    pub fn sale_price(&self, net_cost: Decimal, margin_percent: Decimal) -> Decimal {
        let factor = Decimal::ONE + percent_to_fraction(margin_percent);
        let sale_price = round_amount(net_cost * factor);

        debug!(
            net_cost = %net_cost,
            margin_percent = %margin_percent,
            sale_price = %sale_price,
            "Calculated sale price"
        );

        sale_price
    }

    /// Suggest a sale price for the net cost of a calculation result
    pub fn suggest(&self, result: &CostResult, margin_percent: Decimal) -> PriceSuggestion {
        PriceSuggestion {
            net_cost: result.net_cost,
            margin_percent,
            sale_price: self.sale_price(result.net_cost, margin_percent),
        }
    }
}

impl Default for PricingAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggested minimum sale price for a net cost and a margin (%)
pub fn compute_sale_price(net_cost: Decimal, margin_percent: Decimal) -> Decimal {
    PricingAdvisor::new().sale_price(net_cost, margin_percent)
}
