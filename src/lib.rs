//! Net cost calculator library
//!
//! Computes the net cost of a purchase after recoverable ICMS and PIS/COFINS
//! credits, and suggests a minimum sale price from a desired margin. The two
//! calculations are pure; the HTTP API and the console prompt are thin front
//! ends over them.

pub mod cli;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::costs::{compute_net_cost, CostCalculator, CostResult, TaxScenario};
pub use modules::pricing::{compute_sale_price, PriceSuggestion, PricingAdvisor};
