use aisummary_common::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Common trait for AI chat providers
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider identifier ("openai", "ollama", ...)
    fn id(&self) -> &str;

    /// Send a system/user message pair and return the normalized text response
    async fn chat(&self, system: &str, user: &str, model: &str) -> Result<String>;
}

/// Resolved default provider and model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSelection {
    /// Provider id
    pub provider_id: String,

    /// Model identifier
    pub model_id: String,
}
