//! # Configuration Persistence
//!
//! Save and load settings to/from disk.

use std::fs;
use std::path::{Path, PathBuf};

use edunexus_nav::UserProfile;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while persisting configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform has no per-user config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Reading or writing the file failed.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not valid configuration.
    #[error("invalid config format: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initial window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Whether the sidebar starts at its wide width.
    #[serde(default = "default_expanded")]
    pub sidebar_expanded: bool,

    /// Identity shown in the sidebar footer.
    #[serde(default)]
    pub user: UserProfile,

    #[serde(default)]
    pub window: WindowConfig,
}

fn default_expanded() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar_expanded: default_expanded(),
            user: UserProfile::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    /// Returns the config file path.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("edunexus").join("config.json"))
    }

    /// Loads configuration from disk, or returns default if not found.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Loads configuration from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                tracing::info!(?path, "Loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Saves configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!(?path, "Saved configuration");
        Ok(())
    }
}
