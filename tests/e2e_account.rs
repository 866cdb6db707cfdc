// tests/e2e_account.rs
use axum::http::{Method, StatusCode};
use quillpost::domain::article::ArticleStatus;
use serde_json::json;

mod support;

use support::{
    ADMIN_TOKEN, AUTHOR_ID, AUTHOR_TOKEN, ArticleBuilder, CategoryBuilder, EXPIRED_TOKEN,
    MEMBER_ID, MEMBER_TOKEN, OTHER_AUTHOR_ID, OTHER_AUTHOR_TOKEN, PASSWORD, TestApp,
    assert_error_response, ids, send, send_raw,
};

fn new_article(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "body": "Some text worth reading",
        "thumbnail": "images/cover.png"
    })
}

#[tokio::test]
async fn profile_requires_a_valid_token() {
    let router = TestApp::seeded().router();

    let (status, body) = send(&router, Method::GET, "/api/v1/account/profile", Some(MEMBER_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "mallory");
    assert_eq!(body["capabilities"].as_array().unwrap().len(), 0);

    let resp = send_raw(&router, Method::GET, "/api/v1/account/profile", None, None, &[]).await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = send_raw(&router, Method::GET, "/api/v1/account/profile", Some(EXPIRED_TOKEN), None, &[]).await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn profile_update_sets_names_and_clears_email() {
    let app = TestApp::seeded();
    let router = app.router();

    let (status, body) = send(
        &router,
        Method::PATCH,
        "/api/v1/account/profile",
        Some(MEMBER_TOKEN),
        Some(json!({ "first_name": "Mal", "email": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Mal");
    assert!(body["email"].is_null());
    assert!(app.users.get(MEMBER_ID).unwrap().email.is_none());

    let resp = send_raw(
        &router,
        Method::PATCH,
        "/api/v1/account/profile",
        Some(MEMBER_TOKEN),
        Some(json!({ "email": "not-an-address" })),
        &[],
    )
    .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn own_password_change_checks_current_and_strength() {
    let router = TestApp::seeded().router();
    let uri = "/api/v1/account/password";

    let resp = send_raw(
        &router,
        Method::POST,
        uri,
        Some(AUTHOR_TOKEN),
        Some(json!({ "current_password": "wrong", "new_password": "An0ther-Strong-Pass" })),
        &[],
    )
    .await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = send_raw(
        &router,
        Method::POST,
        uri,
        Some(AUTHOR_TOKEN),
        Some(json!({ "current_password": PASSWORD, "new_password": "short" })),
        &[],
    )
    .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let (status, _) = send(
        &router,
        Method::POST,
        uri,
        Some(AUTHOR_TOKEN),
        Some(json!({ "current_password": PASSWORD, "new_password": "An0ther-Strong-Pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": "alice", "password": "An0ther-Strong-Pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn dashboard_scopes_articles_by_role() {
    let app = TestApp::seeded();
    app.articles.put(ArticleBuilder::new(1).draft().build());
    app.articles.put(ArticleBuilder::new(2).build());
    app.articles.put(
        ArticleBuilder::new(3)
            .author(OTHER_AUTHOR_ID)
            .status(ArticleStatus::Investigation)
            .build(),
    );
    app.articles.put(
        ArticleBuilder::new(4)
            .author(OTHER_AUTHOR_ID)
            .status(ArticleStatus::Returned)
            .build(),
    );
    let router = app.router();
    let uri = "/api/v1/account/articles";

    let (status, mine) = send(&router, Method::GET, uri, Some(AUTHOR_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&mine), vec![2, 1]);

    // moderation order: published, investigation, draft, returned
    let (_, all) = send(&router, Method::GET, uri, Some(ADMIN_TOKEN), None).await;
    assert_eq!(ids(&all), vec![2, 3, 1, 4]);

    let (_, drafts) = send(&router, Method::GET, "/api/v1/account/articles?status=draft", Some(ADMIN_TOKEN), None).await;
    assert_eq!(ids(&drafts), vec![1]);

    let resp = send_raw(&router, Method::GET, uri, Some(MEMBER_TOKEN), None, &[]).await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn author_submissions_never_publish_directly() {
    let app = TestApp::seeded();
    let router = app.router();
    let uri = "/api/v1/account/articles";

    let mut payload = new_article("Hello World");
    payload["status"] = json!("published");
    payload["author_id"] = json!(OTHER_AUTHOR_ID);
    let (status, body) = send(&router, Method::POST, uri, Some(AUTHOR_TOKEN), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "draft");
    assert_eq!(body["slug"], "hello-world");
    assert_eq!(body["author_id"], AUTHOR_ID);

    let mut payload = new_article("Hello World");
    payload["status"] = json!("investigation");
    let (status, body) = send(&router, Method::POST, uri, Some(AUTHOR_TOKEN), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "investigation");
    assert_eq!(body["slug"], "hello-world-1");
}

#[tokio::test]
async fn superuser_publishes_and_assigns_authors() {
    let app = TestApp::seeded();
    app.categories.put(CategoryBuilder::new(1, "News").build());
    let router = app.router();

    let mut payload = new_article("Launch day");
    payload["status"] = json!("published");
    payload["author_id"] = json!(AUTHOR_ID);
    payload["categories"] = json!([1, 1]);
    payload["is_special"] = json!(true);
    let (status, body) = send(&router, Method::POST, "/api/v1/account/articles", Some(ADMIN_TOKEN), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "published");
    assert_eq!(body["author_id"], AUTHOR_ID);
    assert_eq!(body["is_special"], true);
    assert_eq!(body["category_label"], "News");
}

#[tokio::test]
async fn create_rejects_bad_input() {
    let app = TestApp::seeded();
    app.articles
        .put(ArticleBuilder::new(1).slug("taken").build());
    let router = app.router();
    let uri = "/api/v1/account/articles";

    let mut payload = new_article("Anything");
    payload["slug"] = json!("taken");
    let resp = send_raw(&router, Method::POST, uri, Some(AUTHOR_TOKEN), Some(payload), &[]).await;
    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;

    let mut payload = new_article("Anything");
    payload["categories"] = json!([42]);
    let resp = send_raw(&router, Method::POST, uri, Some(AUTHOR_TOKEN), Some(payload), &[]).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = send_raw(&router, Method::POST, uri, Some(MEMBER_TOKEN), Some(new_article("Anything")), &[]).await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;

    assert_eq!(app.articles.len(), 1);
}

#[tokio::test]
async fn authors_edit_only_their_own_open_articles() {
    let app = TestApp::seeded();
    app.articles.put(
        ArticleBuilder::new(1)
            .status(ArticleStatus::Returned)
            .build(),
    );
    app.articles.put(
        ArticleBuilder::new(2)
            .status(ArticleStatus::Investigation)
            .build(),
    );
    app.articles.put(ArticleBuilder::new(3).draft().build());
    let router = app.router();

    let (status, body) = send(
        &router,
        Method::PUT,
        "/api/v1/account/articles/1",
        Some(AUTHOR_TOKEN),
        Some(json!({ "title": "Reworked" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Reworked");
    assert_eq!(body["slug"], "article-1");
    assert_eq!(body["status"], "draft");

    let resp = send_raw(
        &router,
        Method::PUT,
        "/api/v1/account/articles/2",
        Some(AUTHOR_TOKEN),
        Some(json!({ "title": "Sneaky" })),
        &[],
    )
    .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = send_raw(
        &router,
        Method::PUT,
        "/api/v1/account/articles/3",
        Some(OTHER_AUTHOR_TOKEN),
        Some(json!({ "title": "Not mine" })),
        &[],
    )
    .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(app.articles.get(3).unwrap().title.as_str(), "Article 3");
}

#[tokio::test]
async fn superuser_update_keeps_status_unless_asked() {
    let app = TestApp::seeded();
    app.articles.put(
        ArticleBuilder::new(1)
            .status(ArticleStatus::Investigation)
            .build(),
    );
    let router = app.router();
    let uri = "/api/v1/account/articles/1";

    let (_, body) = send(&router, Method::PUT, uri, Some(ADMIN_TOKEN), Some(json!({ "body": "Edited" }))).await;
    assert_eq!(body["status"], "investigation");
    assert_eq!(body["author_id"], AUTHOR_ID);

    let (_, body) = send(
        &router,
        Method::PUT,
        uri,
        Some(ADMIN_TOKEN),
        Some(json!({ "status": "returned", "author_id": OTHER_AUTHOR_ID })),
    )
    .await;
    assert_eq!(body["status"], "returned");
    assert_eq!(body["author_id"], OTHER_AUTHOR_ID);
}

#[tokio::test]
async fn only_the_superuser_deletes() {
    let app = TestApp::seeded();
    app.articles.put(ArticleBuilder::new(1).draft().build());
    let router = app.router();
    let uri = "/api/v1/account/articles/1";

    let resp = send_raw(&router, Method::DELETE, uri, Some(AUTHOR_TOKEN), None, &[]).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert!(app.articles.get(1).is_some());

    let (status, body) = send(&router, Method::DELETE, uri, Some(ADMIN_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "deleted");
    assert!(app.articles.get(1).is_none());

    let resp = send_raw(&router, Method::DELETE, uri, Some(ADMIN_TOKEN), None, &[]).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}
