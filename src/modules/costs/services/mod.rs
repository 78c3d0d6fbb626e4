pub mod cost_calculator;

pub use cost_calculator::{compute_net_cost, CostCalculator};
