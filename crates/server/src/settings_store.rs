use aisummary_common::{Result, SummaryConfig};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// JSON-file-backed store for editor summary settings
pub struct SettingsStore {
    settings: SummaryConfig,
    updated_at: DateTime<Utc>,
    file_path: PathBuf,
}

impl SettingsStore {
    /// Load settings from disk, falling back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let settings = if path.exists() {
            let data = fs::read_to_string(path)?;
            serde_json::from_str(&data).unwrap_or_else(|e| {
                warn!(
                    "Settings file {} is unreadable ({}), using defaults",
                    path.display(),
                    e
                );
                SummaryConfig::default()
            })
        } else {
            SummaryConfig::default()
        };

        Ok(Self {
            settings,
            updated_at: Utc::now(),
            file_path: path.to_path_buf(),
        })
    }

    /// Current settings snapshot
    pub fn get(&self) -> SummaryConfig {
        self.settings.clone()
    }

    /// Last modification time
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace settings after validation and persist to disk
    pub fn replace(&mut self, settings: SummaryConfig) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        self.updated_at = Utc::now();
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.file_path, data)?;
        Ok(())
    }
}
