use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{percent_to_fraction, round_amount};
use crate::modules::costs::models::{CostResult, TaxScenario};

/// CostCalculator deducts recoverable ICMS, PIS and COFINS credits from a purchase
pub struct CostCalculator;

impl CostCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the itemized net cost for a scenario
    ///
    /// credit = purchase_value × rate / 100 × gate, where the gate is 1 or 0.
    /// Each credit is rounded to 4 digits before summing, then
    /// net_cost = round(purchase_value - total_credits, 4).
    ///
    /// Inputs are not validated; a negative net cost is a valid outcome.
    /// Callers keep `purchase_value` within `core::input::MAX_AMOUNT` and
    /// rates within 100, which keeps every sum inside `Decimal` range.
    pub fn calculate(&self, scenario: &TaxScenario) -> CostResult {
        let purchase_value = scenario.purchase_value;

        let icms_credit = round_amount(
            purchase_value * percent_to_fraction(scenario.icms_rate) * gate(scenario.has_icms_credit),
        );
        let pis_credit = round_amount(
            purchase_value
                * percent_to_fraction(scenario.pis_rate)
                * gate(scenario.has_pis_cofins_credit),
        );
        let cofins_credit = round_amount(
            purchase_value
                * percent_to_fraction(scenario.cofins_rate)
                * gate(scenario.has_pis_cofins_credit),
        );

        let total_credits = round_amount(icms_credit + pis_credit + cofins_credit);
        let net_cost = round_amount(purchase_value - total_credits);

        let result = CostResult {
            purchase_value: round_amount(purchase_value),
            icms_credit,
            pis_credit,
            cofins_credit,
            total_credits,
            net_cost,
        };

        debug!(
            purchase_value = %purchase_value,
            has_icms_credit = scenario.has_icms_credit,
            has_pis_cofins_credit = scenario.has_pis_cofins_credit,
            total_credits = %result.total_credits,
            net_cost = %result.net_cost,
            "Calculated net cost"
        );

        result
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate the itemized net cost for a scenario
pub fn compute_net_cost(scenario: &TaxScenario) -> CostResult {
    CostCalculator::new().calculate(scenario)
}

fn gate(enabled: bool) -> Decimal {
    if enabled {
        Decimal::ONE
    } else {
        Decimal::ZERO
    }
}
