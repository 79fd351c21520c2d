//! Middleware Module
//!
//! - **`auth`** - Bearer-token session check for the directory endpoints

pub mod auth;

pub use auth::require_session;
