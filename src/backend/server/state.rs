/**
 * Application State Management
 *
 * `AppState` holds the shared directory and the session signing secret,
 * with `FromRef` implementations so handlers can extract only the part
 * they need.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use counterparty::backend::server::state::SharedDirectory;
 *
 * async fn handler(State(directory): State<SharedDirectory>) {
 *     let directory = directory.read().await;
 *     // ...
 * }
 * ```
 */

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use tokio::sync::RwLock;

#[cfg(feature = "ssr")]
use crate::backend::directory::Directory;

/// Directory shared across handlers
#[cfg(feature = "ssr")]
pub type SharedDirectory = Arc<RwLock<Directory>>;

/// HS256 secret used to sign and verify session tokens
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct JwtSecret(Arc<str>);

#[cfg(feature = "ssr")]
impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "ssr")]
impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret(..)")
    }
}

/// Main application state
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct AppState {
    pub directory: SharedDirectory,
    pub jwt_secret: JwtSecret,
}

#[cfg(feature = "ssr")]
impl AppState {
    pub fn new(directory: Directory, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
            jwt_secret: JwtSecret::new(jwt_secret),
        }
    }
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for SharedDirectory {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.directory.clone()
    }
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for JwtSecret {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.jwt_secret.clone()
    }
}
