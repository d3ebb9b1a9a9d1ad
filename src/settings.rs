//! User settings persisted as JSON in the platform config directory.
//!
//! A missing file yields defaults. A file that cannot be read or parsed also
//! yields defaults, with a warning, so a bad settings file never blocks an
//! upload.

use crate::constants::{ERROR_DISMISS_MS, MAX_CSV_ROWS, MAX_CSV_SIZE_MB};
use crate::types::DisplayConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const APP_DIR: &str = "csvchart";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display configuration applied whenever a new file is loaded
    pub display: DisplayConfig,
    /// How long an error stays visible
    pub error_dismiss_ms: u64,
    pub max_file_size_mb: usize,
    pub max_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            error_dismiss_ms: ERROR_DISMISS_MS,
            max_file_size_mb: MAX_CSV_SIZE_MB,
            max_rows: MAX_CSV_ROWS,
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from `path`. Out-of-range display sizes are clamped.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&content)?;
        settings.display = settings.display.clamped();
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn error_dismiss_after(&self) -> Duration {
        Duration::from_millis(self.error_dismiss_ms)
    }
}

/// `<config dir>/csvchart/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}
