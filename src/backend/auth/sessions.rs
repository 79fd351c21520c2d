/**
 * Session Management and JWT Tokens
 *
 * HS256 tokens issued by `user/login` and checked by the session
 * middleware on the search endpoints.
 */

#[cfg(feature = "ssr")]
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

#[cfg(feature = "ssr")]
use crate::backend::error::BackendError;
use crate::shared::User;

/// Token lifetime: 30 days
pub const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub pseudo: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// The authenticated caller, attached to request extensions by the
/// session middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
    pub pseudo: String,
}

impl TryFrom<Claims> for SessionUser {
    type Error = uuid::Error;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&claims.sub)?,
            pseudo: claims.pseudo,
        })
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Create a JWT token for a user
#[cfg(feature = "ssr")]
pub fn create_token(secret: &str, user: &User) -> Result<String, BackendError> {
    let now = now_secs();
    let claims = Claims {
        sub: user.id.to_string(),
        pseudo: user.pseudo.clone(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::default(), &claims, &key)?)
}

/// Verify and decode a JWT token
#[cfg(feature = "ssr")]
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, BackendError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}
