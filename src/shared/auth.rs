//! Authentication payloads shared by the client and the directory server.

use serde::{Deserialize, Serialize};

use super::user::User;

/// Body of `POST user/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub pseudo: String,
    pub password: String,
}

/// Successful login: bearer token plus the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
