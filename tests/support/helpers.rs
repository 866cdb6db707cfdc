// tests/support/helpers.rs
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::{self, Body};
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt as _;

use quillpost::application::ports::security::TokenManager;
use quillpost::application::services::{ApplicationServices, BlogSettings, Repositories};
use quillpost::domain::user::Role;
use quillpost::presentation::http::routes::build_router_with_rate_limiter;
use quillpost::presentation::http::state::HttpState;

use super::builders::user;
use super::mocks::{
    ADMIN_ID, AUTHOR_ID, DummyClock, DummySlug, DummyTokenManager, InMemoryArticleRepo,
    InMemoryCategoryRepo, InMemoryHitRepo, InMemoryUserRepo, MEMBER_ID, OTHER_AUTHOR_ID,
    StrictPasswordHasher,
};

pub const PASSWORD: &str = "Sup3r-Secret-Pass";

/// In-memory backing store plus the services wired on top of it.
pub struct TestApp {
    pub users: Arc<InMemoryUserRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub categories: Arc<InMemoryCategoryRepo>,
    pub hits: Arc<InMemoryHitRepo>,
    pub settings: BlogSettings,
}

impl TestApp {
    pub fn empty() -> Self {
        let hits = Arc::new(InMemoryHitRepo::default());
        Self {
            users: Arc::new(InMemoryUserRepo::default()),
            articles: Arc::new(InMemoryArticleRepo::new(Arc::clone(&hits))),
            categories: Arc::new(InMemoryCategoryRepo::default()),
            hits,
            settings: BlogSettings::default(),
        }
    }

    /// Admin, two authors and a member, matching the dummy bearer tokens.
    pub fn seeded() -> Self {
        let app = Self::empty();
        app.users.put(user(ADMIN_ID, "admin", Role::Admin, PASSWORD));
        app.users.put(user(AUTHOR_ID, "alice", Role::Author, PASSWORD));
        app.users
            .put(user(OTHER_AUTHOR_ID, "bob", Role::Author, PASSWORD));
        app.users
            .put(user(MEMBER_ID, "mallory", Role::Member, PASSWORD));
        app
    }

    pub fn services(&self) -> Arc<ApplicationServices> {
        self.services_with(Arc::new(DummyTokenManager))
    }

    pub fn services_with(&self, tokens: Arc<dyn TokenManager>) -> Arc<ApplicationServices> {
        let repos = Repositories {
            users: self.users.clone(),
            article_write: self.articles.clone(),
            article_read: self.articles.clone(),
            categories: self.categories.clone(),
            hits: self.hits.clone(),
        };
        Arc::new(ApplicationServices::new(
            repos,
            Arc::new(StrictPasswordHasher),
            tokens,
            Arc::new(DummyClock),
            Arc::new(DummySlug),
            self.settings.clone(),
        ))
    }

    pub fn router(&self) -> axum::Router {
        self.router_with(Arc::new(DummyTokenManager))
    }

    pub fn router_with(&self, tokens: Arc<dyn TokenManager>) -> axum::Router {
        let state = HttpState::new(self.services_with(tokens));
        build_router_with_rate_limiter(state, false)
    }
}

pub async fn make_test_router() -> axum::Router {
    TestApp::seeded().router()
}

/// Fire one request at the router and decode the JSON body (`Null` when empty).
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let resp = send_raw(app, method, uri, token, payload, &[]).await;
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Anonymous GET arriving from the socket address `peer`.
pub async fn get_from_peer(
    app: &axum::Router,
    uri: &str,
    peer: &str,
    extra_headers: &[(&str, &str)],
) -> axum::response::Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    for (name, value) in extra_headers {
        builder = builder.header(*name, *value);
    }
    let mut request = builder.body(Body::empty()).unwrap();
    let peer: SocketAddr = peer.parse().unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_raw(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    payload: Option<Value>,
    extra_headers: &[(&str, &str)],
) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    for (name, value) in extra_headers {
        builder = builder.header(*name, *value);
    }
    let body = match payload {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

pub fn ids(page: &Value) -> Vec<i64> {
    page["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}
