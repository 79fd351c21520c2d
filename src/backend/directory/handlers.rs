/**
 * Directory Handlers
 *
 * - `POST /user/search` - first page of matches for `{ query }`
 * - `POST /user/loadMore` - page `page` for `{ query, page }`, or
 *   `{ "overflow": true }` once the matches are exhausted
 *
 * Both run behind the session middleware; the caller never appears in
 * their own results.
 */

use axum::{extract::State, Extension, Json};

use crate::backend::auth::sessions::SessionUser;
use crate::backend::server::state::SharedDirectory;
use crate::shared::{LoadMoreRequest, LoadMoreResponse, SearchRequest, SearchResponse};

pub async fn search(
    State(directory): State<SharedDirectory>,
    Extension(session): Extension<SessionUser>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let users = directory.read().await.page(&request.query, 1, Some(session.id));
    tracing::debug!("search {:?} -> {} users", request.query, users.len());

    Json(SearchResponse { users })
}

pub async fn load_more(
    State(directory): State<SharedDirectory>,
    Extension(session): Extension<SessionUser>,
    Json(request): Json<LoadMoreRequest>,
) -> Json<LoadMoreResponse> {
    let users = directory
        .read()
        .await
        .page(&request.query, request.page, Some(session.id));
    tracing::debug!(
        "loadMore {:?} page {} -> {} users",
        request.query,
        request.page,
        users.len()
    );

    if users.is_empty() {
        Json(LoadMoreResponse::overflow())
    } else {
        Json(LoadMoreResponse::page(users))
    }
}
