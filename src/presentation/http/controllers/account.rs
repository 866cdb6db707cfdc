// src/presentation/http/controllers/account.rs
use crate::application::{
    commands::{
        articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
        users::{ChangePasswordCommand, UpdateProfileCommand},
    },
    dto::{ArticleDto, Page, UserDto, UserProfileDto},
    queries::articles::DashboardQuery,
};
use crate::domain::article::ArticleStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    Authenticated, JsonBody, PathParam, QueryParams,
};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardParams {
    pub status: Option<ArticleStatus>,
    pub q: Option<String>,
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    /// An empty string clears the address.
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeOwnPasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

fn default_status() -> ArticleStatus {
    ArticleStatus::Draft
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub body: String,
    pub thumbnail: String,
    #[serde(default)]
    pub categories: Vec<i64>,
    /// Defaults to the creation time.
    #[serde(default)]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_special: bool,
    #[serde(default = "default_status")]
    pub status: ArticleStatus,
    /// Honored only for callers allowed to assign authors.
    #[serde(default)]
    pub author_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub thumbnail: Option<String>,
    pub categories: Option<Vec<i64>>,
    pub publish_at: Option<DateTime<Utc>>,
    pub is_special: Option<bool>,
    pub status: Option<ArticleStatus>,
    pub author_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/account/profile",
    responses(
        (status = 200, description = "The caller's profile and capabilities.", body = UserProfileDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/account/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated.", body = UserDto),
        (status = 400, description = "Invalid field value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<UpdateProfileRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateProfileCommand {
        email: payload.email,
        first_name: payload.first_name,
        last_name: payload.last_name,
    };

    state
        .services
        .user_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/account/password",
    request_body = ChangeOwnPasswordRequest,
    responses(
        (status = 200, description = "Password changed.", body = StatusResponse),
        (status = 400, description = "New password too weak.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Current password is wrong.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn change_own_password(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<ChangeOwnPasswordRequest>,
) -> HttpResult<Json<StatusResponse>> {
    let command = ChangePasswordCommand {
        user_id: user.id.into(),
        current_password: Some(payload.current_password),
        new_password: payload.new_password,
    };

    state
        .services
        .user_commands
        .change_password(&user, command)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("password_changed")))
}

#[utoipa::path(
    get,
    path = "/api/v1/account/articles",
    params(DashboardParams),
    responses(
        (status = 200, description = "Articles the caller may manage.", body = crate::presentation::http::openapi::ArticlePage),
        (status = 403, description = "Caller has no dashboard access.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Page past the end of the listing.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    QueryParams(params): QueryParams<DashboardParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    let query = DashboardQuery {
        status: params.status,
        q: params.q,
        page: params.page,
    };

    state
        .services
        .article_queries
        .dashboard(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/account/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid field or unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller has no dashboard access.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        body: payload.body,
        thumbnail: payload.thumbnail,
        category_ids: payload.categories,
        publish_at: payload.publish_at,
        is_special: payload.is_special,
        status: payload.status,
        author_id: payload.author_id,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/v1/account/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Invalid field or unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Missing, or not editable by the caller.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug taken or concurrent edit.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        body: payload.body,
        thumbnail: payload.thumbnail,
        category_ids: payload.categories,
        publish_at: payload.publish_at,
        is_special: payload.is_special,
        status: payload.status,
        author_id: payload.author_id,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/account/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted.", body = StatusResponse),
        (status = 404, description = "Missing, or not deletable by the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
