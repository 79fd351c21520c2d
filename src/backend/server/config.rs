/**
 * Server Configuration
 *
 * Loaded from environment variables (`.env` is read by the binary before
 * this runs). Every value has a development default.
 *
 * | Variable              | Default                     |
 * |-----------------------|-----------------------------|
 * | `SERVER_PORT`         | `3000`                      |
 * | `JWT_SECRET`          | development secret (warned) |
 * | `DIRECTORY_SEED`      | built-in demo accounts      |
 * | `DIRECTORY_PAGE_SIZE` | `10`                        |
 * | `PUBLIC_DIR`          | `public`                    |
 * | `BCRYPT_COST`         | `10`                        |
 */

use std::path::PathBuf;
use std::str::FromStr;

use crate::backend::directory::DEFAULT_PAGE_SIZE;
use crate::backend::error::BackendError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BCRYPT_COST: u32 = 10;
const DEV_JWT_SECRET: &str = "counterparty-dev-secret-change-me";

/// Directory server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub page_size: usize,
    /// JSON seed file; `None` uses the demo accounts
    pub seed_path: Option<PathBuf>,
    /// Served under `/static`
    pub public_dir: PathBuf,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            seed_path: None,
            public_dir: PathBuf::from("public"),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, BackendError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> Result<Self, BackendError> {
        let defaults = Self::default();

        let jwt_secret = match env("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                defaults.jwt_secret
            }
        };

        let page_size = parse(&env, "DIRECTORY_PAGE_SIZE")?.unwrap_or(defaults.page_size);
        if page_size == 0 {
            return Err(BackendError::config("DIRECTORY_PAGE_SIZE", "must be at least 1"));
        }

        let bcrypt_cost = parse(&env, "BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(BackendError::config("BCRYPT_COST", "must be between 4 and 31"));
        }

        Ok(Self {
            port: parse(&env, "SERVER_PORT")?.unwrap_or(defaults.port),
            jwt_secret,
            page_size,
            seed_path: env("DIRECTORY_SEED").filter(|s| !s.is_empty()).map(PathBuf::from),
            public_dir: env("PUBLIC_DIR").map(PathBuf::from).unwrap_or(defaults.public_dir),
            bcrypt_cost,
        })
    }
}

fn parse<T>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, BackendError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| BackendError::config(key, format!("{:?}: {}", raw, e)))
        })
        .transpose()
}
