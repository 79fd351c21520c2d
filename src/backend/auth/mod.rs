//! Authentication Module
//!
//! Login and bearer-token sessions for the directory server.
//!
//! - **`sessions`** - JWT creation and verification, `SessionUser`
//! - **`handlers`** - `POST /user/login`

/// JWT session tokens
pub mod sessions;

/// HTTP handlers
pub mod handlers;

pub use handlers::login;
pub use sessions::{create_token, verify_token, Claims, SessionUser};
