pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, SummaryConfig, DEFAULT_PROMPT};
pub use error::AiSummaryError;
pub type Result<T> = std::result::Result<T, AiSummaryError>;
