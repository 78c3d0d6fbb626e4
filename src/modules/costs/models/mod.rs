pub mod cost_result;
pub mod tax_scenario;

pub use cost_result::CostResult;
pub use tax_scenario::TaxScenario;
