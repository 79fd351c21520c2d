//! TOML configuration file
//!
//! ```toml
//! server_url = "https://market.example.com/api"
//! public_url = "https://market.example.com/public"
//! end_reached_threshold = 0.1
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "COUNTERPARTY_CONFIG";

/// Values a config file may set. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub server_url: Option<String>,
    pub public_url: Option<String>,
    pub end_reached_threshold: Option<f32>,
}

impl ConfigFile {
    /// Read and parse a config file
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the file if it exists; a missing file is not an error
    pub fn read_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(None);
        }
        Self::read(path).map(Some)
    }
}

/// `<config_dir>/counterparty/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("counterparty").join("config.toml"))
}
