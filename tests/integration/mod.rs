//! Integration tests
//!
//! - **`client_test`** - Directory client against a mock server
//! - **`controller_test`** - Picker controller over real HTTP
//! - **`server_test`** - Directory server router (ssr)

mod client_test;
#[cfg(feature = "ssr")]
mod server_test;
