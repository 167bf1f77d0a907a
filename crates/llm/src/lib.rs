//! AI Summary LLM Integration
//!
//! Chat provider adapters, text sanitization and summary generation

mod ollama;
mod openai;
mod prompts;
mod provider;
mod registry;
mod sanitize;
mod summarize;
mod types;

pub use ollama::OllamaChatProvider;
pub use openai::OpenAiChatProvider;
pub use prompts::{summary_prompt, ChatPrompt, SYSTEM_PROMPT};
pub use provider::{ChatProvider, ProviderSelection};
pub use registry::ProviderRegistry;
pub use sanitize::sanitize;
pub use summarize::SummaryGenerator;
pub use types::{SummaryRequest, SummaryResult};
