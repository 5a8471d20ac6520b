pub mod actions;
pub mod models;
pub mod phrases;

// Re-export commonly used types
pub use actions::{answer, look_up};
pub use models::{AnswerDetails, AnswerResult, Article, LookupError};
