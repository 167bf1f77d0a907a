/// AI summary service error types
#[derive(Debug, thiserror::Error)]
pub enum AiSummaryError {
    /// No chat-capable AI provider is configured
    #[error("No AI provider configured for chat operations. Please configure an AI provider first.")]
    NoProviderConfigured,

    /// Failure reported by the external AI provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AiSummaryError {
    /// Create provider error
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        Self::Provider(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

// HTTP response conversion (for actix-web)
impl AiSummaryError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::NotFound(_) => 404,
            Self::NoProviderConfigured => 500,
            Self::Provider(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AiSummaryError::invalid_input("x").status_code(), 400);
        assert_eq!(AiSummaryError::not_found("x").status_code(), 404);
        assert_eq!(AiSummaryError::NoProviderConfigured.status_code(), 500);
        assert_eq!(AiSummaryError::provider("x").status_code(), 500);
    }

    #[test]
    fn test_no_provider_message() {
        let msg = AiSummaryError::NoProviderConfigured.to_string();
        assert!(msg.contains("No AI provider configured"));
    }
}
