pub mod controllers;
pub mod models;
pub mod services;

pub use models::PriceSuggestion;
pub use services::{compute_sale_price, PricingAdvisor};
