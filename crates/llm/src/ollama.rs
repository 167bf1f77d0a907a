use aisummary_common::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::provider::ChatProvider;

/// Ollama chat request
#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Ollama chat response
#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
    #[serde(default)]
    done: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

/// Ollama chat API client
#[derive(Debug, Clone)]
pub struct OllamaChatProvider {
    base_url: String,
    client: Client,
}

impl OllamaChatProvider {
    /// Create new Ollama chat provider
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minutes for LLM calls
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Ollama chat provider initialized: {}", base_url);
        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl ChatProvider for OllamaChatProvider {
    fn id(&self) -> &str {
        "ollama"
    }

    async fn chat(&self, system: &str, user: &str, model: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);

        debug!(
            "Sending chat request to Ollama - Model: {}, Prompt length: {}",
            model,
            user.len()
        );

        let request = OllamaChatRequest {
            model,
            messages: vec![
                OllamaMessage {
                    role: "system",
                    content: system,
                },
                OllamaMessage {
                    role: "user",
                    content: user,
                },
            ],
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send request: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("Ollama API error: {}", e))?;

        let result: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse response: {}", e))?;

        if result.message.content.is_empty() {
            return Err(anyhow::anyhow!("Empty response from Ollama").into());
        }

        debug!(
            "Received response from Ollama - Length: {}, Done: {}",
            result.message.content.len(),
            result.done
        );
        Ok(result.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let provider = OllamaChatProvider::new("http://localhost:11434").unwrap();
        assert_eq!(provider.id(), "ollama");
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"model":"llama3.2","message":{"role":"assistant","content":"A summary."},"done":true}"#;
        let response: OllamaChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.content, "A summary.");
        assert!(response.done);
    }
}
