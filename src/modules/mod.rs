pub mod costs;
pub mod health;
pub mod pricing;

use actix_web::web;

use crate::middleware::json_error_handler;

/// Mount every route of the service
///
/// Health lives at the root; calculations live under `/api/v1`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(health::configure)
        .service(
            web::scope("/api/v1")
                .configure(costs::controllers::configure_cost_routes)
                .configure(pricing::controllers::configure_pricing_routes),
        );
}
