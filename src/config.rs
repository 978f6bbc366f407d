//! Configuration loading for bpdex.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (highest priority)
//! 2. User config (`~/.bpdex/config.toml`)
//! 3. Defaults (lowest priority)
//!
//! All configuration is optional. The system runs with sensible defaults
//! when no config exists.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError};
use crate::storage::STORAGE_KEY;

/// Main configuration struct for bpdex.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Dataset location configuration.
    pub dataset: DatasetConfig,
}

/// Dataset location configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path of the blueprint dataset JSON file.
    ///
    /// When unset, `<home>/blueprints.json` is used.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration with the full precedence chain.
    ///
    /// Loading is fail-open: a missing or malformed config file yields
    /// defaults, with environment overrides still applied.
    pub fn load() -> Self {
        let mut config = config_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default();

        config.apply_env_overrides();
        config
    }

    /// Load config from a specific file path.
    fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| TrackerError::storage(path, e))?;
        toml::from_str(&content).map_err(|e| TrackerError::config(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("BPDEX_DATASET") {
            if val.is_empty() {
                tracing::warn!("BPDEX_DATASET is empty, ignoring");
            } else {
                self.dataset.path = Some(PathBuf::from(val));
            }
        }
    }

    /// Resolve the dataset path: configured value or `<home>/blueprints.json`.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset
            .path
            .clone()
            .or_else(|| bpdex_home().map(|h| h.join("blueprints.json")))
    }
}

/// Get the bpdex home directory.
///
/// Checks `BPDEX_HOME` first, then falls back to `~/.bpdex`.
pub fn bpdex_home() -> Option<PathBuf> {
    if let Ok(home) = env::var("BPDEX_HOME") {
        if home.is_empty() {
            tracing::warn!("BPDEX_HOME is empty, using default");
        } else {
            return Some(PathBuf::from(home));
        }
    }

    if let Some(home) = dirs::home_dir() {
        return Some(home.join(".bpdex"));
    }

    // Fallback for containerized/minimal environments without HOME
    let fallback_path = std::env::temp_dir().join("bpdex");
    tracing::warn!(
        "HOME not set, using fallback location: {}",
        fallback_path.display()
    );
    Some(fallback_path)
}

/// Get the user config file path.
///
/// Returns `<home>/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    bpdex_home().map(|h| h.join("config.toml"))
}

/// Get the status record file path.
///
/// Returns `<home>/arcraiders_bp_v2_ui.json`.
pub fn status_file_path() -> Option<PathBuf> {
    bpdex_home().map(|h| h.join(format!("{}.json", STORAGE_KEY)))
}
