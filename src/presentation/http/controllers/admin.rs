// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::{
        articles::BulkSetStatusCommand,
        users::{ChangePasswordCommand, UpdateUserCommand},
    },
    dto::{BulkStatusResultDto, UserDto},
};
use crate::domain::{article::ArticleStatus, user::Role};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParam};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkStatusRequest {
    pub ids: Vec<i64>,
    pub status: ArticleStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub is_active: Option<bool>,
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetPasswordRequest {
    pub new_password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/articles/status",
    request_body = BulkStatusRequest,
    responses(
        (status = 200, description = "Statuses applied to the matching articles.", body = BulkStatusResultDto),
        (status = 400, description = "Empty id list.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller cannot publish.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn bulk_set_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<BulkStatusRequest>,
) -> HttpResult<Json<BulkStatusResultDto>> {
    let command = BulkSetStatusCommand {
        ids: payload.ids,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .bulk_set_status(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/admin/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated.", body = UserDto),
        (status = 400, description = "Nothing to update.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller cannot manage users.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateUserCommand {
        user_id: id,
        is_active: payload.is_active,
        role: payload.role,
    };

    state
        .services
        .user_commands
        .update_user(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/users/{id}/password",
    params(("id" = i64, Path, description = "User id")),
    request_body = SetPasswordRequest,
    responses(
        (status = 200, description = "Password replaced.", body = StatusResponse),
        (status = 400, description = "New password too weak.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller cannot manage users.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn change_user_password(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<SetPasswordRequest>,
) -> HttpResult<Json<StatusResponse>> {
    let command = ChangePasswordCommand {
        user_id: id,
        current_password: None,
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
