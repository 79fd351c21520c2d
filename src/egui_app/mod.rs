//! egui Native Desktop App Module
//!
//! The counterparty picker as a native desktop application (egui/eframe),
//! talking to the directory server over HTTP.
//!
//! # Architecture
//!
//! - **`config`** - Server/public URLs, bearer token, end-reached threshold
//! - **`api`** - Blocking client for `user/search`, `user/loadMore`, `user/login`
//! - **`auth`** - Login state and call
//! - **`types`** - Screens of the navigation stack
//! - **`navigation`** - Navigation stack
//! - **`store`** - Cross-screen store (`achat` slice)
//! - **`search`** - Picker state and controller
//! - **`selection`** - Selection dispatcher
//! - **`state`** - `AppState` tying the above together
//! - **`views`**, **`components`**, **`theme`** - egui rendering
//!
//! # Data flow
//!
//! Views call controller handlers (`search`, `load_more_data`), which start
//! requests on worker threads. `AppState::tick` runs at the top of every
//! frame and merges finished requests. Selecting a row dispatches
//! `AchatAction::SetUser` and pushes `VendeurSelected`.

pub mod config;
pub mod api;
pub mod auth;
pub mod types;
pub mod navigation;
pub mod store;
pub mod search;
pub mod selection;
pub mod state;
pub mod views;
pub mod components;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use api::{ApiError, DirectoryApi, DirectoryApiClient};
pub use auth::{login, AuthState};
pub use types::Screen;
pub use navigation::Navigator;
pub use store::{AchatAction, AchatState, Store};
pub use search::{SearchController, SearchState};
pub use state::AppState;
