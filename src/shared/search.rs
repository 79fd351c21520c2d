//! Directory search payloads
//!
//! Request and response bodies for `user/search` and `user/loadMore`.

use serde::{Deserialize, Serialize};

use super::user::User;

/// Body of `POST user/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Body of `POST user/loadMore`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadMoreRequest {
    pub query: String,
    /// 1-based page number
    pub page: u32,
}

/// Response of `user/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Response of `user/loadMore`: either `{ users }` or `{ overflow: true }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadMoreResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub overflow: bool,
}

impl LoadMoreResponse {
    pub fn overflow() -> Self {
        Self {
            users: Vec::new(),
            overflow: true,
        }
    }

    pub fn page(users: Vec<User>) -> Self {
        Self {
            users,
            overflow: false,
        }
    }
}

/// Decoded outcome of a load-more request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadMorePage {
    /// The next page of results
    Users(Vec<User>),
    /// The server has nothing past the current page
    Overflow,
}

impl From<LoadMoreResponse> for LoadMorePage {
    fn from(value: LoadMoreResponse) -> Self {
        if value.overflow {
            LoadMorePage::Overflow
        } else {
            LoadMorePage::Users(value.users)
        }
    }
}
