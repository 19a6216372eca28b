//! Settings model.

use std::path::{Path, PathBuf};

use anyhow::Context;
use emotone_core::RecipientCategory;
use serde::{Deserialize, Serialize};

const fn default_delay_ms() -> u64 {
    800
}

const fn default_true() -> bool {
    true
}

/// Application settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Recipient used when none is given on the command line.
    #[serde(default)]
    pub default_recipient: RecipientCategory,
    /// Pause before showing results, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub response_delay_ms: u64,
    /// Whether grammar corrections are listed under the variants.
    #[serde(default = "default_true")]
    pub show_corrections: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_recipient: RecipientCategory::Boss,
            response_delay_ms: default_delay_ms(),
            show_corrections: true,
        }
    }
}

impl AppSettings {
    /// Default settings location: `<config_dir>/emotone/settings.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("emotone")
            .join("settings.json")
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            tracing::debug!("No settings at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read settings from {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    /// Save settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("failed to write settings to {}", path.display()))?;

        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }
}
