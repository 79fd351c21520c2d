//! Directory client integration tests
//!
//! Wire format and status mapping of `user/search`, `user/loadMore` and
//! `user/login`.

use assert_matches::assert_matches;
use counterparty::egui_app::{ApiError, DirectoryApi, DirectoryApiClient};
use counterparty::shared::LoadMorePage;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{client_config, user, users, DirectoryMock};

fn client(mock: &DirectoryMock, token: Option<&str>) -> DirectoryApiClient {
    DirectoryApiClient::new(client_config(&mock.uri(), token))
}

#[test]
fn test_search_posts_query_with_bearer_token() {
    let mock = DirectoryMock::start();
    let found = users("ami", 3);
    mock.mount(
        Mock::given(method("POST"))
            .and(path("/user/search"))
            .and(header("authorization", "Bearer tok-123"))
            .and(body_json(json!({ "query": "ami" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": found }))),
    );

    let result = client(&mock, Some("tok-123")).search("ami").expect("search succeeds");

    assert_eq!(result, found);
}

#[test]
fn test_search_without_token_sends_no_authorization() {
    let mock = DirectoryMock::start();
    mock.mount(
        Mock::given(method("POST"))
            .and(path("/user/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] }))),
    );

    let result = client(&mock, None).search("ami").unwrap();

    assert!(result.is_empty());
    let requests = mock.requests_to("/user/search");
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[test]
fn test_forbidden_maps_to_distinct_error() {
    let mock = DirectoryMock::start();
    mock.mount(
        Mock::given(method("POST"))
            .and(path("/user/search"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "Missing bearer token", "status": 403 }))),
    );

    let err = client(&mock, None).search("ami").unwrap_err();

    assert_matches!(err, ApiError::Forbidden);
    assert!(err.is_forbidden());
}

#[test]
fn test_other_status_keeps_code_and_body() {
    let mock = DirectoryMock::start();
    mock.mount(
        Mock::given(method("POST"))
            .and(path("/user/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom")),
    );

    let err = client(&mock, Some("tok")).search("ami").unwrap_err();

    assert_matches!(err, ApiError::Status { status: 500, ref body } if body == "boom");
    assert!(!err.is_forbidden());
}

#[test]
fn test_malformed_body_is_decode_error() {
    let mock = DirectoryMock::start();
    mock.mount(
        Mock::given(method("POST"))
            .and(path("/user/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>")),
    );

    let err = client(&mock, Some("tok")).search("ami").unwrap_err();

    assert_matches!(err, ApiError::Decode(_));
}

#[test]
fn test_unreachable_server_is_network_error() {
    let client = DirectoryApiClient::new(client_config("http://127.0.0.1:1", None));

    let err = client.search("ami").unwrap_err();

    assert_matches!(err, ApiError::Network(_));
}

#[test]
fn test_load_more_sends_page_and_returns_users() {
    let mock = DirectoryMock::start();
    let page = users("page2-", 2);
    mock.mount(
        Mock::given(method("POST"))
            .and(path("/user/loadMore"))
            .and(body_json(json!({ "query": "ami", "page": 2 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": page }))),
    );

    let result = client(&mock, Some("tok")).load_more("ami", 2).unwrap();

    assert_eq!(result, LoadMorePage::Users(page));
}

#[test]
fn test_load_more_overflow() {
    let mock = DirectoryMock::start();
    mock.mount(
        Mock::given(method("POST"))
            .and(path("/user/loadMore"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "overflow": true }))),
    );

    let result = client(&mock, Some("tok")).load_more("ami", 5).unwrap();

    assert_eq!(result, LoadMorePage::Overflow);
}

#[test]
fn test_login_returns_token_and_user() {
    let mock = DirectoryMock::start();
    let amina = user("amina");
    mock.mount(
        Mock::given(method("POST"))
            .and(path("/user/login"))
            .and(body_json(json!({ "pseudo": "amina", "password": "motdepasse" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-abc", "user": amina }))),
    );

    let response = client(&mock, None).login("amina", "motdepasse").unwrap();

    assert_eq!(response.token, "tok-abc");
    assert_eq!(response.user, amina);
}

#[test]
fn test_login_401_is_invalid_credentials() {
    let mock = DirectoryMock::start();
    mock.mount(
        Mock::given(method("POST"))
            .and(path("/user/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "bad", "status": 401 }))),
    );

    let err = client(&mock, None).login("amina", "wrong").unwrap_err();

    assert_matches!(err, ApiError::InvalidCredentials);
}
