use std::path::Path;

use crate::shared::config::{file, AppConfig, AppConfigBuilder, ConfigError, ConfigFile};
use crate::shared::config::DEFAULT_SERVER_URL;
use crate::shared::User;

/// Environment variable overriding the API base URL
pub const SERVER_URL_ENV: &str = "CLIENT_API_URL";
/// Environment variable overriding the public asset base URL
pub const PUBLIC_URL_ENV: &str = "CLIENT_PUBLIC_URL";

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
    token: Option<String>,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app, token: None })
    }

    /// Load from the default config file location and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(file::CONFIG_PATH_ENV)
            .ok()
            .map(Into::into)
            .or_else(file::default_path);
        Self::load_from(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Layer defaults, an optional config file, then environment lookups
    pub fn load_from(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();
        if let Some(path) = path {
            if let Some(file) = ConfigFile::read_optional(path)? {
                tracing::info!("Loaded config from {}", path.display());
                builder = builder.merge_file(file);
            }
        }
        if let Some(url) = env(SERVER_URL_ENV) {
            builder = builder.server_url(url);
        }
        if let Some(url) = env(PUBLIC_URL_ENV) {
            builder = builder.public_url(url);
        }
        Self::with_builder(builder)
    }

    /// Set the bearer token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the bearer token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        join_url(self.server_url(), path)
    }

    /// Get the full URL for a public asset
    pub fn public_url(&self, path: &str) -> String {
        match self.app.public_url.as_deref() {
            Some(base) => join_url(base, path),
            None => join_url(&join_url(self.server_url(), "static"), path),
        }
    }

    /// Profile picture URL for a user, or the placeholder avatar
    pub fn photo_url(&self, user: &User) -> String {
        self.public_url(&user.photo_path())
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn end_reached_threshold(&self) -> f32 {
        self.app.end_reached_threshold
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
