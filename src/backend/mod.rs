//! Backend Module
//!
//! The directory server used by the counterparty picker: an Axum HTTP
//! server answering `user/search`, `user/loadMore` and `user/login` from an
//! in-memory directory.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, state, and application assembly
//! - **`routes`** - Router and route tables
//! - **`directory`** - Accounts, matching, paging, and their handlers
//! - **`auth`** - Login and JWT sessions
//! - **`middleware`** - Bearer-token check (403 on failure)
//! - **`error`** - `BackendError` and its HTTP response
//!
//! # Example
//!
//! ```rust,no_run
//! use counterparty::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config)?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod server;
pub mod routes;
pub mod directory;
pub mod auth;
pub mod middleware;
pub mod error;

pub use error::BackendError;
