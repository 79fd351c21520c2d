//! Directory API Client
//!
//! Blocking HTTP client for the user directory endpoints. Calls are made from
//! worker threads (see [`crate::egui_app::search::SearchController`]), never
//! from the UI thread.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::{
    AuthResponse, LoadMorePage, LoadMoreRequest, LoadMoreResponse, LoginRequest, SearchRequest,
    SearchResponse, User,
};

pub const SEARCH_PATH: &str = "user/search";
pub const LOAD_MORE_PATH: &str = "user/loadMore";
pub const LOGIN_PATH: &str = "user/login";

/// Errors returned by the directory endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 403: the session is missing or expired
    #[error("access forbidden, login required")]
    Forbidden,

    /// HTTP 401 on login: wrong pseudo or password
    #[error("invalid pseudo or password")]
    InvalidCredentials,

    /// Any other non-success status
    #[error("request failed: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden)
    }
}

/// The two paginated search operations the picker depends on
pub trait DirectoryApi: Send + Sync {
    /// First page of users matching `query`
    fn search(&self, query: &str) -> Result<Vec<User>, ApiError>;

    /// Page `page` (1-based) of users matching `query`
    fn load_more(&self, query: &str, page: u32) -> Result<LoadMorePage, ApiError>;
}

/// Directory API client
#[derive(Debug, Clone)]
pub struct DirectoryApiClient {
    config: Config,
    client: Client,
}

impl DirectoryApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Exchange credentials for a bearer token
    pub fn login(&self, pseudo: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = LoginRequest {
            pseudo: pseudo.to_string(),
            password: password.to_string(),
        };
        self.post(LOGIN_PATH, &request).map_err(|e| match e {
            ApiError::Status { status: 401, .. } => ApiError::InvalidCredentials,
            other => other,
        })
    }

    fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = self.config.get_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(ApiError::Network)?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            return Err(ApiError::Forbidden);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| status.to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<R>().map_err(ApiError::Decode)
    }
}

impl DirectoryApi for DirectoryApiClient {
    fn search(&self, query: &str) -> Result<Vec<User>, ApiError> {
        let request = SearchRequest {
            query: query.to_string(),
        };
        let response: SearchResponse = self.post(SEARCH_PATH, &request)?;
        Ok(response.users)
    }

    fn load_more(&self, query: &str, page: u32) -> Result<LoadMorePage, ApiError> {
        let request = LoadMoreRequest {
            query: query.to_string(),
            page,
        };
        let response: LoadMoreResponse = self.post(LOAD_MORE_PATH, &request)?;
        Ok(response.into())
    }
}
