//! Common test utilities and helpers
//!
//! - User and config fixtures
//! - A wiremock directory server usable from blocking tests
//! - Custom assertion macros

pub mod assertions;
pub mod fixtures;
pub mod mock_server;

// Re-export commonly used utilities
pub use fixtures::*;
pub use mock_server::*;
