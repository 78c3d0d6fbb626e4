pub mod cost_controller;

pub use cost_controller::{configure_cost_routes, NetCostRequest, NetCostResponse};
