// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{account, admin, auth, blog, categories},
    middleware::login_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, patch, post, put},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Build the router, optionally without the login limiter. The limiter keys
/// on the peer address, which in-process test requests do not carry.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit_login: bool) -> Router {
    let mut login = post(auth::login);
    if rate_limit_login {
        if let Some(limiter) = login_rate_limit_layer() {
            login = login.layer(limiter);
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/articles", get(blog::list_published))
        .route("/api/v1/articles/popular", get(blog::popular))
        .route("/api/v1/articles/search", get(blog::search))
        .route("/api/v1/articles/by-slug/{slug}", get(blog::article_detail))
        .route("/api/v1/articles/{id}/preview", get(blog::preview))
        .route("/api/v1/categories", get(categories::list_active))
        .route(
            "/api/v1/categories/{slug}/articles",
            get(blog::category_articles),
        )
        .route(
            "/api/v1/authors/{username}/articles",
            get(blog::author_articles),
        )
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", login)
        .route(
            "/api/v1/account/profile",
            get(account::profile).patch(account::update_profile),
        )
        .route("/api/v1/account/password", post(account::change_own_password))
        .route(
            "/api/v1/account/articles",
            get(account::dashboard).post(account::create_article),
        )
        .route(
            "/api/v1/account/articles/{id}",
            put(account::update_article).delete(account::delete_article),
        )
        .route("/api/v1/admin/articles/status", post(admin::bulk_set_status))
        .route(
            "/api/v1/admin/categories",
            get(categories::list_all).post(categories::create_category),
        )
        .route(
            "/api/v1/admin/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route(
            "/api/v1/admin/users/{id}",
            patch(admin::update_user),
        )
        .route(
            "/api/v1/admin/users/{id}/password",
            post(admin::change_user_password),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer())
        .layer(Extension(state))
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = AppConfig::allowed_origins_from_env()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse::new("ok"))
}
