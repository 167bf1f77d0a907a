use serde::{Deserialize, Serialize};

/// Summary generation request body
#[derive(Debug, Deserialize)]
pub struct GenerateSummaryRequest {
    /// Raw article text to summarize
    pub text: String,

    /// Maximum summary length in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Minimum summary length in characters
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

fn default_max_length() -> usize {
    150
}

fn default_min_length() -> usize {
    50
}

/// Successful summary response
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Generated summary text
    pub summary: String,

    /// Always true
    pub success: bool,
}

/// Structured error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Always false
    pub success: bool,
}

impl ErrorResponse {
    /// Create new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: false,
        }
    }
}
