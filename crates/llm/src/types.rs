use serde::{Deserialize, Serialize};

/// Summary generation request
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    /// Raw article text, sanitized before any provider call
    pub raw_text: String,

    /// Maximum summary length in characters
    pub max_length: usize,

    /// Minimum summary length in characters
    pub min_length: usize,
}

impl SummaryRequest {
    /// Create new summary request
    pub fn new(raw_text: impl Into<String>, max_length: usize, min_length: usize) -> Self {
        Self {
            raw_text: raw_text.into(),
            max_length,
            min_length,
        }
    }
}

/// Summary generation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Generated summary text (empty on failure)
    pub text: String,

    /// Whether generation succeeded
    pub success: bool,

    /// Error message when generation failed
    pub error: Option<String>,
}

impl SummaryResult {
    /// Successful result
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
            error: None,
        }
    }

    /// Failed result
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            success: false,
            error: Some(message.into()),
        }
    }
}
