//! Shared Module
//!
//! Types shared between the desktop client and the directory server: the
//! public user record, search/login payloads, the trade role, configuration,
//! and common errors. Everything here is plain data meant for serialization.

/// Public directory user
pub mod user;

/// `user/search` and `user/loadMore` payloads
pub mod search;

/// `user/login` payloads
pub mod auth;

/// Buy/sell role flag and route parameters
pub mod trade;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use user::User;
pub use search::{LoadMorePage, LoadMoreRequest, LoadMoreResponse, SearchRequest, SearchResponse};
pub use auth::{AuthResponse, LoginRequest};
pub use trade::{RouteParams, TradeRole};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigFile};
