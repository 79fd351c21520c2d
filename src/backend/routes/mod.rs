//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation
//! └── api_routes.rs  - /user/* endpoints
//! ```
//!
//! # Routes
//!
//! - `POST /user/search` - Search (bearer token required)
//! - `POST /user/loadMore` - Pagination (bearer token required)
//! - `POST /user/login` - Login
//! - `GET /static/*` - Public assets (profile photos, avatar placeholder)

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
