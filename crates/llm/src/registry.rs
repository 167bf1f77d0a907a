use aisummary_common::{AiSummaryError, AppConfig, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::ollama::OllamaChatProvider;
use crate::openai::OpenAiChatProvider;
use crate::provider::{ChatProvider, ProviderSelection};

/// Registry of available chat providers and the configured default
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn ChatProvider>>,
    default_provider: String,
    default_model: String,
}

impl ProviderRegistry {
    /// Create an empty registry with a default selection
    pub fn new(default_provider: impl Into<String>, default_model: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
            default_model: default_model.into(),
        }
    }

    /// Build the registry with the built-in adapters from application config
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut registry = Self::new(&config.ai_provider, &config.ai_model);

        registry.register(Arc::new(OpenAiChatProvider::new(
            &config.openai_base_url,
            &config.openai_api_key,
        )?));
        registry.register(Arc::new(OllamaChatProvider::new(&config.ollama_base_url)?));

        if config.ai_provider.is_empty() {
            info!("No default AI provider configured");
        } else {
            info!(
                "Default AI provider: {} (model: {})",
                config.ai_provider, config.ai_model
            );
        }

        Ok(registry)
    }

    /// Register a provider under its own id
    pub fn register(&mut self, provider: Arc<dyn ChatProvider>) {
        self.providers.insert(provider.id().to_string(), provider);
    }

    /// Resolve the default chat-capable provider and model
    pub fn resolve_default(&self) -> Result<(Arc<dyn ChatProvider>, ProviderSelection)> {
        if self.default_provider.is_empty() {
            return Err(AiSummaryError::NoProviderConfigured);
        }

        let provider = self
            .providers
            .get(&self.default_provider)
            .cloned()
            .ok_or_else(|| {
                AiSummaryError::config(format!(
                    "Unknown AI provider '{}'",
                    self.default_provider
                ))
            })?;

        if self.default_model.is_empty() {
            return Err(AiSummaryError::config("No AI model configured"));
        }

        let selection = ProviderSelection {
            provider_id: self.default_provider.clone(),
            model_id: self.default_model.clone(),
        };

        Ok((provider, selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unconfigured() {
        let registry = ProviderRegistry::new("", "gpt-4o-mini");
        let err = registry.resolve_default().err().unwrap();
        assert!(matches!(err, AiSummaryError::NoProviderConfigured));
        assert!(err.to_string().contains("No AI provider configured"));
    }

    #[test]
    fn test_resolve_unknown_provider() {
        let registry = ProviderRegistry::new("acme", "some-model");
        let err = registry.resolve_default().err().unwrap();
        assert!(err.to_string().contains("Unknown AI provider"));
    }

    #[test]
    fn test_resolve_from_config() {
        let mut config = AppConfig::default();
        config.ai_provider = "ollama".to_string();
        config.ai_model = "llama3.2".to_string();

        let registry = ProviderRegistry::from_config(&config).unwrap();
        let (provider, selection) = registry.resolve_default().unwrap();
        assert_eq!(provider.id(), "ollama");
        assert_eq!(selection.provider_id, "ollama");
        assert_eq!(selection.model_id, "llama3.2");
    }

    #[test]
    fn test_resolve_missing_model() {
        let mut config = AppConfig::default();
        config.ai_provider = "openai".to_string();
        config.ai_model = String::new();

        let registry = ProviderRegistry::from_config(&config).unwrap();
        assert!(registry.resolve_default().is_err());
    }
}
