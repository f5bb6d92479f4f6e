//! Configuration loading and management
//!
//! Handles parsing of `tdl.toml` configuration files. Configuration is
//! optional: when no file exists, defaults apply.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the task store (default: platform data dir)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// What to do when the persisted task list cannot be read
    #[serde(default)]
    pub on_corrupt: CorruptPolicy,
}

/// Policy for handling an unreadable task store on load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptPolicy {
    /// Quarantine the unreadable file and start from an empty list
    #[default]
    Reset,
    /// Refuse to start
    Fail,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicitly given path must exist and parse. Without one, the
    /// platform config dir is consulted and an absent file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::InvalidConfig(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Parse a config file at the given path
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Default location of `tdl.toml` in the platform config directory
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tdl")
            .map(|dirs| dirs.config_dir().join("tdl.toml"))
    }
}
