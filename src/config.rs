//! User configuration.
//!
//! Loaded from `workfleet/config.toml` under the platform config directory
//! (XDG on Linux and macOS, `%APPDATA%` on Windows), or from the path named
//! by `WORKFLEET_CONFIG_PATH`. Every key is optional; a missing file yields
//! the defaults.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UserConfig {
    /// Workspace root scanned by every command; `--dir` overrides it.
    #[serde(rename = "root-dir")]
    pub root_dir: Option<String>,
    /// Treat untracked files as outstanding changes in `status`.
    pub strict: Option<bool>,
}

impl UserConfig {
    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(UserConfig::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?
            .try_deserialize()
    }

    pub fn strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }
}

/// Get the user config file path.
///
/// Priority:
/// 1. `WORKFLEET_CONFIG_PATH` environment variable (also used by tests)
/// 2. Platform-specific default location
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("WORKFLEET_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }

    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("workfleet").join("config.toml"))
}
