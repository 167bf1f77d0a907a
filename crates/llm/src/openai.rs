use aisummary_common::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::provider::ChatProvider;

/// Chat completion request (OpenAI wire format)
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completion response (OpenAI wire format)
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// OpenAI-compatible chat API client
#[derive(Debug, Clone)]
pub struct OpenAiChatProvider {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenAiChatProvider {
    /// Create new OpenAI chat provider
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minutes for LLM calls
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("OpenAI chat provider initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            client,
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    fn id(&self) -> &str {
        "openai"
    }

    async fn chat(&self, system: &str, user: &str, model: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            "Sending chat request to OpenAI - Model: {}, Prompt length: {}",
            model,
            user.len()
        );

        let request = ChatCompletionRequest {
            model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: system,
                },
                WireMessage {
                    role: "user",
                    content: user,
                },
            ],
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send request: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("OpenAI API error: {}", e))?;

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse response: {}", e))?;

        let text = result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(anyhow::anyhow!("Empty response from OpenAI").into());
        }

        debug!("Received response from OpenAI - Length: {}", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let provider = OpenAiChatProvider::new("https://api.openai.com/v1", "sk-test").unwrap();
        assert_eq!(provider.id(), "openai");
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: vec![WireMessage {
                role: "system",
                content: "be brief",
            }],
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["stream"], false);
    }
}
