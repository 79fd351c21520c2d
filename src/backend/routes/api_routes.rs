/**
 * API Routes
 *
 * ## Directory (session required, 403 otherwise)
 * - `POST /user/search` - First page of matches
 * - `POST /user/loadMore` - Next pages, `{ overflow: true }` when exhausted
 *
 * ## Authentication
 * - `POST /user/login` - Returns a bearer token
 */

use axum::{middleware, routing::post, Router};

use crate::backend::auth::login;
use crate::backend::directory::{load_more, search};
use crate::backend::middleware::require_session;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The session check is a `route_layer`, so it only runs for the directory
/// routes and unknown paths still fall through to the 404 fallback.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let directory_routes = Router::new()
        .route("/user/search", post(search))
        .route("/user/loadMore", post(load_more))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), require_session));

    router
        .merge(directory_routes)
        .route("/user/login", post(login))
}
