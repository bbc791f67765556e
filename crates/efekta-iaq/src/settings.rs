//! Reporting settings using JSON file storage

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

const SETTINGS_FILE: &str = "iaq-settings.json";

/// Interval bounds applied to every reporting registration in `configure`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingSettings {
    /// Seconds
    pub min_interval: u16,
    /// Seconds
    pub max_interval: u16,
    pub reportable_change: u16,
}

impl Default for ReportingSettings {
    fn default() -> Self {
        Self {
            min_interval: 0,
            max_interval: 300,
            reportable_change: 0,
        }
    }
}

impl ReportingSettings {
    /// `IAQ_SETTINGS`, else `$DATA_DIR/iaq-settings.json`
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("IAQ_SETTINGS") {
            return PathBuf::from(path);
        }
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        PathBuf::from(data_dir).join(SETTINGS_FILE)
    }

    /// Load settings, falling back to defaults when absent or unreadable
    pub async fn load(path: &Path) -> Self {
        match fs::read_to_string(path).await {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(settings) => {
                    tracing::info!("Loaded reporting settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings file found at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save settings atomically
    #[allow(clippy::missing_errors_doc)]
    pub async fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).await?;
        fs::rename(&tmp_path, path).await?;

        tracing::debug!("Saved reporting settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("efekta-iaq-{}-{}", std::process::id(), name))
            .join(SETTINGS_FILE)
    }

    #[test]
    fn test_default_path() {
        if std::env::var_os("IAQ_SETTINGS").is_none() {
            assert!(ReportingSettings::default_path().ends_with(SETTINGS_FILE));
        }
    }

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let settings = ReportingSettings::load(&scratch("missing")).await;
        assert_eq!(settings, ReportingSettings::default());
        assert_eq!(settings.max_interval, 300);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let path = scratch("save");
        let settings = ReportingSettings {
            min_interval: 10,
            max_interval: 600,
            reportable_change: 5,
        };
        settings.save(&path).await.unwrap();
        assert_eq!(ReportingSettings::load(&path).await, settings);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir).await;
        }
    }

    #[tokio::test]
    async fn test_partial_and_broken_files() {
        let path = scratch("partial");
        fs::create_dir_all(path.parent().unwrap()).await.unwrap();

        fs::write(&path, r#"{"max_interval": 900}"#).await.unwrap();
        let settings = ReportingSettings::load(&path).await;
        assert_eq!(settings.max_interval, 900);
        assert_eq!(settings.min_interval, 0);

        fs::write(&path, "not json").await.unwrap();
        assert_eq!(ReportingSettings::load(&path).await, ReportingSettings::default());

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir).await;
        }
    }
}
