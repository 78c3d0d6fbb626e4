//! Sale price controller for HTTP endpoints

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::input::{deserialize_decimal, validate_margin, validate_net_cost};
use crate::core::Result;
use crate::modules::pricing::models::PriceSuggestion;
use crate::modules::pricing::services::PricingAdvisor;

#[derive(Debug, Clone, Deserialize)]
pub struct SalePriceRequest {
    /// Net cost as returned by the net cost calculation; any sign, bounded magnitude
    #[serde(deserialize_with = "deserialize_decimal")]
    pub net_cost: Decimal,

    #[serde(deserialize_with = "deserialize_decimal")]
    pub margin_percent: Decimal,
}

/// Suggest a sale price for a net cost
///
/// POST /api/v1/sale-price
pub async fn suggest_sale_price(request: web::Json<SalePriceRequest>) -> Result<HttpResponse> {
    let (net_cost, margin_percent) = validate_net_cost(request.net_cost)
        .and_then(|net_cost| validate_margin(request.margin_percent).map(|m| (net_cost, m)))
        .inspect_err(|err| tracing::warn!("Rejected sale price form: {}", err))?;

    let sale_price = PricingAdvisor::new().sale_price(net_cost, margin_percent);

    Ok(HttpResponse::Ok().json(PriceSuggestion {
        net_cost,
        margin_percent,
        sale_price,
    }))
}

/// Configure sale price routes
pub fn configure_pricing_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sale-price", web::post().to(suggest_sale_price));
}
