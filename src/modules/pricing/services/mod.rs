pub mod pricing_advisor;

pub use pricing_advisor::{compute_sale_price, PricingAdvisor};
