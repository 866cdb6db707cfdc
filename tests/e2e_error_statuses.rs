// tests/e2e_error_statuses.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{ADMIN_TOKEN, AUTHOR_TOKEN, TestApp, assert_error_response, send_raw};

#[tokio::test]
async fn unparsable_query_is_a_json_bad_request() {
    let router = TestApp::seeded().router();

    let resp = send_raw(&router, Method::GET, "/api/v1/articles?page=abc", None, None, &[]).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = send_raw(&router, Method::GET, "/api/v1/articles/popular?limit=-1", None, None, &[]).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn incomplete_body_is_a_json_bad_request() {
    let app = TestApp::seeded();
    let router = app.router();

    let resp = send_raw(
        &router,
        Method::POST,
        "/api/v1/account/articles",
        Some(AUTHOR_TOKEN),
        Some(json!({ "title": "No body, no thumbnail" })),
        &[],
    )
    .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(app.articles.len(), 0);
}

#[tokio::test]
async fn missing_content_type_is_a_json_bad_request() {
    let router = TestApp::seeded().router();

    let resp = send_raw(&router, Method::POST, "/api/v1/auth/login", None, None, &[]).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn non_numeric_path_id_is_a_json_bad_request() {
    let router = TestApp::seeded().router();

    let resp = send_raw(
        &router,
        Method::PUT,
        "/api/v1/account/articles/abc",
        Some(ADMIN_TOKEN),
        Some(json!({ "title": "Renamed" })),
        &[],
    )
    .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = send_raw(&router, Method::GET, "/api/v1/articles/abc/preview", Some(ADMIN_TOKEN), None, &[]).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}
