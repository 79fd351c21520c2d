//! Counterparty - Main Library
//!
//! Search-and-select screen for choosing the counterparty (buyer or seller)
//! of a marketplace offer, by phone number, email, or username.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and server
//!   - Public user record, search/login payloads, trade role
//!   - Configuration and shared errors
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Search controller with paginated loading
//!   - Selection dispatcher, shared store, navigation stack
//!   - Blocking HTTP client for the directory endpoints
//!
//! - **`backend`** - Directory server (only compiled with `ssr` feature)
//!   - Axum router for `user/search`, `user/loadMore`, `user/login`
//!   - In-memory directory, bcrypt passwords, JWT sessions
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the `backend` module and the `directory-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use counterparty::egui_app::{Config, DirectoryApiClient, Navigator, SearchController};
//!
//! let api = Arc::new(DirectoryApiClient::new(Config::new()));
//! let mut picker = SearchController::new(api);
//! let mut navigator = Navigator::default();
//!
//! picker.set_query("amina");
//! picker.search();
//! // once per frame:
//! picker.poll(&mut navigator);
//! ```

/// Shared types and data structures
pub mod shared;

/// Directory server
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
