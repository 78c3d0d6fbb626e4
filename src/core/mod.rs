pub mod error;
pub mod input;
pub mod money;

pub use error::{AppError, Result};
pub use money::round_amount;
