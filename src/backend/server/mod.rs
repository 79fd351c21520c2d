//! Server Module
//!
//! - **`config`** - `ServerConfig` from environment variables
//! - **`state`** - `AppState` and its `FromRef` parts
//! - **`init`** - Application assembly

/// Server configuration
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::{create_app, create_app_with_directory};
pub use state::{AppState, JwtSecret, SharedDirectory};
