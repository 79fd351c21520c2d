//! Shared Error Types
//!
//! Error types used by both the desktop client and the directory server.
//!
//! # Usage
//!
//! ```rust
//! use counterparty::shared::error::SharedError;
//!
//! let error = SharedError::validation("pseudo", "pseudo cannot be empty");
//! assert!(error.to_string().contains("pseudo"));
//! ```
use thiserror::Error;

/// Shared error types that can occur in both frontend and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
