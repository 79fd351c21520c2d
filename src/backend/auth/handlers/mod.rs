//! Authentication Handlers
//!
//! - **`login`** - `POST /user/login`

pub mod login;

pub use login::login;
