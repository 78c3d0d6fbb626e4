pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CostResult, TaxScenario};
pub use services::{compute_net_cost, CostCalculator};
