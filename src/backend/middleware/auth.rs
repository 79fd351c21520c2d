/**
 * Session Middleware
 *
 * Guards the directory endpoints. Reads `Authorization: Bearer <token>`,
 * verifies it, and attaches a `SessionUser` to the request extensions.
 * A missing, malformed, expired, or forged token answers 403, which the
 * client treats as "go to the login screen".
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{verify_token, SessionUser};
use crate::backend::error::BackendError;
use crate::backend::server::state::JwtSecret;

pub async fn require_session(
    State(secret): State<JwtSecret>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let session = session_from_request(secret.as_str(), &request)?;
    tracing::debug!("Session {} on {}", session.pseudo, request.uri().path());

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

fn session_from_request(secret: &str, request: &Request) -> Result<SessionUser, BackendError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::forbidden("Missing bearer token")
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::forbidden("Invalid Authorization header")
    })?;

    let claims = verify_token(secret, token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::forbidden("Invalid or expired session")
    })?;

    SessionUser::try_from(claims).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {}", e);
        BackendError::forbidden("Invalid or expired session")
    })
}
