//! Application configuration module
//!
//! Provides the client configuration type, its builder, and validation.
//! Values come from (lowest to highest precedence) built-in defaults, an
//! optional TOML file (see [`file`]), and environment variables.

pub mod file;

use std::path::PathBuf;

use thiserror::Error;

pub use file::ConfigFile;

/// Default directory server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Distance from the end of the list, as a fraction of the visible
/// length, at which the next page is requested
pub const DEFAULT_END_REACHED_THRESHOLD: f32 = 0.1;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST API
    pub server_url: Option<String>,
    /// Base URL of public assets (profile photos). Defaults to
    /// `<server_url>/static`.
    pub public_url: Option<String>,
    pub end_reached_threshold: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            public_url: None,
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for url in [&self.server_url, &self.public_url].into_iter().flatten() {
            validate_url(url)?;
        }
        let threshold = self.end_reached_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidUrl(url.to_string()))?;
    if rest.trim_matches('/').is_empty() || rest.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidUrl(url.to_string()));
    }
    Ok(())
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    public_url: Option<String>,
    end_reached_threshold: Option<f32>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the public asset URL
    pub fn public_url(mut self, url: String) -> Self {
        self.public_url = Some(url);
        self
    }

    pub fn end_reached_threshold(mut self, threshold: f32) -> Self {
        self.end_reached_threshold = Some(threshold);
        self
    }

    /// Overlay the values present in a config file
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(url) = file.server_url {
            self.server_url = Some(url);
        }
        if let Some(url) = file.public_url {
            self.public_url = Some(url);
        }
        if let Some(threshold) = file.end_reached_threshold {
            self.end_reached_threshold = Some(threshold);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url.map(|u| u.trim_end_matches('/').to_string()),
            public_url: self.public_url.map(|u| u.trim_end_matches('/').to_string()),
            end_reached_threshold: self
                .end_reached_threshold
                .unwrap_or(DEFAULT_END_REACHED_THRESHOLD),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("end-reached threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f32),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
