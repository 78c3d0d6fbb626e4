pub mod prompt;

pub use prompt::{PromptSession, SessionReport};
