/**
 * Authentication Module
 *
 * Login state for the `Login1` screen and the login call itself.
 */

use crate::egui_app::api::{ApiError, DirectoryApiClient};
use crate::egui_app::config::Config;
use crate::shared::{AuthResponse, User};

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<User>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

/// Login with pseudo and password
pub fn login(config: &Config, pseudo: String, password: String) -> Result<AuthResponse, ApiError> {
    DirectoryApiClient::new(config.clone()).login(&pseudo, &password)
}
