//! Directory User
//!
//! The public view of a directory account: what the search endpoints return
//! and what the picker stores once a counterparty is chosen. Contact details
//! (email, phone) never leave the server.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Folder (relative to the public asset root) holding profile photos
pub const PROFILE_PHOTO_DIR: &str = "images/profils";

/// Placeholder image used when a user has no photo
pub const AVATAR_PLACEHOLDER: &str = "images/avatar.png";

/// A user as returned by `user/search` and `user/loadMore`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub pseudo: String,
    pub firstname: String,
    pub lastname: String,
    /// File name of the profile photo, relative to [`PROFILE_PHOTO_DIR`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl User {
    /// "Firstname Lastname", trimmed when either part is missing
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname).trim().to_string()
    }

    /// Asset path of the user's picture, relative to the public root
    pub fn photo_path(&self) -> String {
        match self.photo.as_deref().filter(|p| !p.is_empty()) {
            Some(photo) => format!("{}/{}", PROFILE_PHOTO_DIR, photo),
            None => AVATAR_PLACEHOLDER.to_string(),
        }
    }

    /// Single uppercase letter used for the avatar badge
    pub fn initial(&self) -> String {
        self.pseudo
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}
