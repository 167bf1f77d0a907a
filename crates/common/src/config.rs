use crate::error::AiSummaryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Built-in summary instruction, used when no prompt is configured
pub const DEFAULT_PROMPT: &str =
    "Create a detailed summary of the following text using the same language as the following text.";

/// AI summary application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data directory (settings store, logs)
    pub data_dir: PathBuf,

    /// Editor settings file path
    pub settings_path: PathBuf,

    /// Active AI provider id ("openai", "ollama"); empty means unconfigured
    pub ai_provider: String,

    /// Model identifier passed to the provider
    pub ai_model: String,

    /// OpenAI-compatible API base URL
    pub openai_base_url: String,

    /// OpenAI API key
    pub openai_api_key: String,

    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Static assets directory (editor demo page)
    pub static_dir: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            settings_path: PathBuf::from("./data/summary_settings.json"),
            ai_provider: String::new(),
            ai_model: "gpt-4o-mini".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_api_key: String::new(),
            ollama_base_url: "http://localhost:11434".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            static_dir: PathBuf::from("./crates/server/static"),
            log_dir: PathBuf::from("./data/log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, AiSummaryError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            data_dir: Self::get_env_path("DATA_DIR").unwrap_or_else(|| PathBuf::from("./data")),
            settings_path: Self::get_env_path("SETTINGS_PATH")
                .unwrap_or_else(|| PathBuf::from("./data/summary_settings.json")),
            ai_provider: std::env::var("AI_PROVIDER").unwrap_or_default(),
            ai_model: std::env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            static_dir: Self::get_env_path("STATIC_DIR")
                .unwrap_or_else(|| PathBuf::from("./crates/server/static")),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or_else(|| PathBuf::from("./data/log")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), AiSummaryError> {
        let dirs = vec![&self.data_dir, &self.log_dir];

        for dir in dirs {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    AiSummaryError::config(format!(
                        "Failed to create directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AiSummaryError> {
        // Provider id is optional but must be known when set
        if !self.ai_provider.is_empty()
            && self.ai_provider != "openai"
            && self.ai_provider != "ollama"
        {
            return Err(AiSummaryError::config(format!(
                "Unknown AI provider '{}', expected 'openai' or 'ollama'",
                self.ai_provider
            )));
        }

        // Validate base URLs
        for url in [&self.openai_base_url, &self.ollama_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AiSummaryError::config(
                    "Provider base URL must start with http:// or https://",
                ));
            }
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(AiSummaryError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

/// Editor-managed summary settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// The main instruction sent to the AI for generating summaries
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Maximum number of characters for generated summaries
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Minimum number of characters for generated summaries
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// View mode used when extracting content for summarization
    #[serde(default = "default_view_mode")]
    pub view_mode: String,

    /// Automatically generate summaries when the summary field is empty
    #[serde(default)]
    pub auto_generate_summary: bool,

    /// Content types with summary generation available
    #[serde(default)]
    pub enabled_types: BTreeSet<String>,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_max_length() -> usize {
    150
}

fn default_min_length() -> usize {
    50
}

fn default_view_mode() -> String {
    "ai_summary_source".to_string()
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            max_length: default_max_length(),
            min_length: default_min_length(),
            view_mode: default_view_mode(),
            auto_generate_summary: false,
            enabled_types: BTreeSet::new(),
        }
    }
}

impl SummaryConfig {
    /// Validate settings against the administrative form bounds
    pub fn validate(&self) -> Result<(), AiSummaryError> {
        if self.prompt.trim().is_empty() {
            return Err(AiSummaryError::invalid_input("Prompt cannot be empty"));
        }

        if !(50..=10000).contains(&self.max_length) {
            return Err(AiSummaryError::invalid_input(
                "Maximum length must be between 50 and 10000",
            ));
        }

        if !(10..=2000).contains(&self.min_length) {
            return Err(AiSummaryError::invalid_input(
                "Minimum length must be between 10 and 2000",
            ));
        }

        if self.min_length > self.max_length {
            return Err(AiSummaryError::invalid_input(
                "Minimum length cannot exceed maximum length",
            ));
        }

        if self.view_mode.trim().is_empty() {
            return Err(AiSummaryError::invalid_input("View mode cannot be empty"));
        }

        Ok(())
    }
}
