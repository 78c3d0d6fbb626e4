//! Net cost controller for HTTP endpoints
//!
//! Plays the role of the calculation form: collects the purchase scenario,
//! validates it, runs the calculator and, when a margin is given, the
//! pricing advisor.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::input::{
    deserialize_decimal, deserialize_optional_decimal, validate_margin, validate_purchase_value,
    validate_rate,
};
use crate::core::Result;
use crate::modules::costs::models::{CostResult, TaxScenario};
use crate::modules::costs::services::CostCalculator;
use crate::modules::pricing::models::PriceSuggestion;
use crate::modules::pricing::services::PricingAdvisor;

/// Form fields for a net cost calculation
#[derive(Debug, Clone, Deserialize)]
pub struct NetCostRequest {
    #[serde(deserialize_with = "deserialize_decimal")]
    pub purchase_value: Decimal,

    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub icms_rate: Option<Decimal>,

    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub pis_rate: Option<Decimal>,

    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub cofins_rate: Option<Decimal>,

    #[serde(default)]
    pub has_icms_credit: bool,

    #[serde(default)]
    pub has_pis_cofins_credit: bool,

    /// Desired margin (%); a suggestion is returned only when above zero
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub margin_percent: Option<Decimal>,
}

impl NetCostRequest {
    /// Validate the form and build the scenario handed to the calculator
    pub fn to_scenario(&self) -> Result<TaxScenario> {
        Ok(TaxScenario {
            purchase_value: validate_purchase_value(self.purchase_value)?,
            icms_rate: validate_rate("ICMS", self.icms_rate.unwrap_or_default())?,
            pis_rate: validate_rate("PIS", self.pis_rate.unwrap_or_default())?,
            cofins_rate: validate_rate("COFINS", self.cofins_rate.unwrap_or_default())?,
            has_icms_credit: self.has_icms_credit,
            has_pis_cofins_credit: self.has_pis_cofins_credit,
        })
    }

    /// Validated margin, zero when absent
    pub fn margin(&self) -> Result<Decimal> {
        validate_margin(self.margin_percent.unwrap_or_default())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NetCostResponse {
    pub result: CostResult,
    pub suggestion: Option<PriceSuggestion>,
}

/// Calculate net cost (and optionally a sale price)
///
/// POST /api/v1/net-cost
pub async fn calculate_net_cost(request: web::Json<NetCostRequest>) -> Result<HttpResponse> {
    let (scenario, margin) = request
        .to_scenario()
        .and_then(|scenario| request.margin().map(|margin| (scenario, margin)))
        .inspect_err(|err| tracing::warn!("Rejected net cost form: {}", err))?;

    let result = CostCalculator::new().calculate(&scenario);
    let suggestion = if margin > Decimal::ZERO {
        Some(PricingAdvisor::new().suggest(&result, margin))
    } else {
        None
    };

    Ok(HttpResponse::Ok().json(NetCostResponse { result, suggestion }))
}

/// Configure net cost routes
pub fn configure_cost_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/net-cost", web::post().to(calculate_net_cost));
}
