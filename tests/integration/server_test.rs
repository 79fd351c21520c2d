//! Directory server integration tests
//!
//! Requests go through the full router (session middleware, handlers,
//! fallback) with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use counterparty::backend::directory::{demo_seeds, Directory};
use counterparty::backend::server::{create_app_with_directory, ServerConfig};
use counterparty::shared::{AuthResponse, LoadMoreResponse, SearchResponse};
use serde_json::{json, Value};
use tower::ServiceExt;

const PASSWORD: &str = "motdepasse";

struct TestApp {
    router: Router,
    _public_dir: tempfile::TempDir,
}

fn app() -> TestApp {
    let public_dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(public_dir.path().join("images")).unwrap();
    std::fs::write(public_dir.path().join("images/avatar.png"), b"png").unwrap();

    let config = ServerConfig {
        jwt_secret: "integration-secret".to_string(),
        public_dir: public_dir.path().to_path_buf(),
        bcrypt_cost: 4,
        ..ServerConfig::default()
    };
    let directory = Directory::from_seeds(demo_seeds(), config.page_size, config.bcrypt_cost).unwrap();

    TestApp {
        router: create_app_with_directory(directory, &config),
        _public_dir: public_dir,
    }
}

async fn post(app: &TestApp, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
    let mut request = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = request.body(Body::from(body.to_string())).unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn login(app: &TestApp, pseudo: &str) -> AuthResponse {
    let (status, body) = post(app, "/user/login", None, json!({ "pseudo": pseudo, "password": PASSWORD })).await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    serde_json::from_value(body).unwrap()
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let app = app();

    let auth = login(&app, "Amina").await;

    assert!(!auth.token.is_empty());
    assert_eq!(auth.user.pseudo, "amina");
    assert_eq!(auth.user.full_name(), "Amina Diallo");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = app();

    let (status, body) = post(&app, "/user/login", None, json!({ "pseudo": "amina", "password": "nope" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);

    let (status, _) = post(&app, "/user/login", None, json!({ "pseudo": "ghost", "password": PASSWORD })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejects_empty_pseudo() {
    let app = app();

    let (status, _) = post(&app, "/user/login", None, json!({ "pseudo": " ", "password": PASSWORD })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_requires_session() {
    let app = app();

    let (status, body) = post(&app, "/user/search", None, json!({ "query": "a" })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], 403);

    let (status, _) = post(&app, "/user/loadMore", Some("forged.token.value"), json!({ "query": "a", "page": 2 })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_search_and_load_more_page_through_matches() {
    let app = app();
    let auth = login(&app, "amina").await;
    let token = Some(auth.token.as_str());

    // Every demo account is on exemple.fr; the caller is excluded: 11 matches
    let (status, body) = post(&app, "/user/search", token, json!({ "query": "exemple.fr" })).await;
    assert_eq!(status, StatusCode::OK);
    let first: SearchResponse = serde_json::from_value(body).unwrap();
    assert_eq!(first.users.len(), 10);
    assert!(first.users.iter().all(|u| u.id != auth.user.id));

    let (status, body) = post(&app, "/user/loadMore", token, json!({ "query": "exemple.fr", "page": 2 })).await;
    assert_eq!(status, StatusCode::OK);
    let second: LoadMoreResponse = serde_json::from_value(body).unwrap();
    assert_eq!(second.users.len(), 1);
    assert!(!second.overflow);
    assert!(first.users.iter().all(|u| u.id != second.users[0].id));

    let (status, body) = post(&app, "/user/loadMore", token, json!({ "query": "exemple.fr", "page": 3 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "overflow": true }));
}

#[tokio::test]
async fn test_search_by_phone_digits() {
    let app = app();
    let auth = login(&app, "amina").await;

    let (status, body) = post(&app, "/user/search", Some(&auth.token), json!({ "query": "06.23.45" })).await;

    assert_eq!(status, StatusCode::OK);
    let found: SearchResponse = serde_json::from_value(body).unwrap();
    crate::assert_pseudos!(found.users, ["bastien"]);
}

#[tokio::test]
async fn test_empty_query_returns_no_users() {
    let app = app();
    let auth = login(&app, "amina").await;

    let (status, body) = post(&app, "/user/search", Some(&auth.token), json!({ "query": "" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "users": [] }));
}

#[tokio::test]
async fn test_static_assets_and_fallback() {
    let app = app();

    let request = Request::get("/static/images/avatar.png").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::get("/nowhere").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
