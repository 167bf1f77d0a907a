use aisummary_common::{AppConfig, Result};
use aisummary_llm::SummaryGenerator;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::settings_store::SettingsStore;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Editor settings store
    pub settings: Arc<RwLock<SettingsStore>>,

    /// Summary generator
    pub generator: Arc<SummaryGenerator>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, generator: Arc<SummaryGenerator>) -> Result<Self> {
        let settings = SettingsStore::load(&config.settings_path)?;

        Ok(Self {
            config,
            settings: Arc::new(RwLock::new(settings)),
            generator,
        })
    }
}
