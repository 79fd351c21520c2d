/**
 * Backend Error Types
 *
 * Errors raised by the directory server: request handling, session checks,
 * startup (configuration, seed loading) and the crates underneath (bcrypt,
 * jsonwebtoken).
 *
 * # Status Mapping
 *
 * - `HandlerError` - carries its own status (400, 401, 403, 404)
 * - `ConfigError`, `SeedError`, `StateError` - 500
 * - `TokenError`, `HashError` - 500 (token *verification* failures are
 *   mapped to 403 by the session middleware before they get here)
 * - `SharedError` - 400 (request field validation)
 */

use std::path::PathBuf;

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// Each variant can be converted to an HTTP response (see `conversion`).
///
/// # Usage
///
/// ```rust
/// use counterparty::backend::error::BackendError;
///
/// let err = BackendError::forbidden("Missing bearer token");
/// assert_eq!(err.status_code().as_u16(), 403);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request-level failure with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Invalid server configuration value
    #[error("Invalid configuration for {key}: {message}")]
    ConfigError {
        /// Environment variable name
        key: String,
        message: String,
    },

    /// Directory seed file could not be read or parsed
    #[error("Failed to load directory seed {path}: {message}")]
    SeedError { path: PathBuf, message: String },

    /// Shared state or task failure
    #[error("State error: {message}")]
    StateError { message: String },

    /// JWT encoding/decoding failure
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password hash error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 403, used for missing or invalid sessions
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::FORBIDDEN, message)
    }

    /// 401, used for bad login credentials
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigError {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn seed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SeedError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::ConfigError { .. } | Self::SeedError { .. } | Self::StateError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::TokenError(_) | Self::HashError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message
    ///
    /// Internal failures are reported generically; the detail goes to the log.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}
