pub mod price_suggestion;

pub use price_suggestion::PriceSuggestion;
