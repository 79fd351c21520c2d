/**
 * Login Handler
 *
 * `POST /user/login`: exchanges `{ pseudo, password }` for `{ token, user }`.
 *
 * # Authentication Process
 *
 * 1. Look up the account by pseudo (case-insensitive)
 * 2. Verify the password with bcrypt, off the async runtime
 * 3. Issue a 30-day JWT
 *
 * Unknown pseudo and wrong password both answer 401 with the same message.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::sessions::create_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::{JwtSecret, SharedDirectory};
use crate::shared::{AuthResponse, LoginRequest, SharedError};

const INVALID_CREDENTIALS: &str = "Identifiant ou mot de passe incorrect";

pub async fn login(
    State(directory): State<SharedDirectory>,
    State(secret): State<JwtSecret>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    if request.pseudo.trim().is_empty() {
        return Err(SharedError::validation("pseudo", "pseudo cannot be empty").into());
    }
    if request.password.is_empty() {
        return Err(SharedError::validation("password", "password cannot be empty").into());
    }

    let (user, password_hash) = {
        let directory = directory.read().await;
        let account = directory.find_by_pseudo(&request.pseudo).ok_or_else(|| {
            tracing::debug!("Login for unknown pseudo {:?}", request.pseudo);
            BackendError::unauthorized(INVALID_CREDENTIALS)
        })?;
        (account.user.clone(), account.password_hash().to_string())
    };

    let password = request.password;
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| BackendError::state(format!("password check task failed: {}", e)))??;

    if !valid {
        tracing::debug!("Wrong password for {}", user.pseudo);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = create_token(secret.as_str(), &user)?;
    tracing::info!("User {} logged in", user.pseudo);

    Ok(Json(AuthResponse { token, user }))
}
