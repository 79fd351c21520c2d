//! Router Configuration
//!
//! Assembles the API routes, static profile images, fallback, and request
//! tracing into one router.
//!
//! # Route Order
//!
//! 1. API routes (`/user/*`)
//! 2. Static files under `/static` (avatars: `/static/images/...`)
//! 3. Fallback: JSON 404

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, public_dir: &Path) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    let router = router.nest_service("/static", ServeDir::new(public_dir));

    let router = router.fallback(not_found);

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}
