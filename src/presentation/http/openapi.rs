// src/presentation/http/openapi.rs
use crate::application::dto::ArticleDto;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Document shape of `Page<ArticleDto>`, which handlers return directly.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticlePage {
    pub items: Vec<ArticleDto>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::blog::list_published,
        crate::presentation::http::controllers::blog::popular,
        crate::presentation::http::controllers::blog::search,
        crate::presentation::http::controllers::blog::article_detail,
        crate::presentation::http::controllers::blog::preview,
        crate::presentation::http::controllers::blog::category_articles,
        crate::presentation::http::controllers::blog::author_articles,
        crate::presentation::http::controllers::categories::list_active,
        crate::presentation::http::controllers::categories::list_all,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::account::profile,
        crate::presentation::http::controllers::account::update_profile,
        crate::presentation::http::controllers::account::change_own_password,
        crate::presentation::http::controllers::account::dashboard,
        crate::presentation::http::controllers::account::create_article,
        crate::presentation::http::controllers::account::update_article,
        crate::presentation::http::controllers::account::delete_article,
        crate::presentation::http::controllers::admin::bulk_set_status,
        crate::presentation::http::controllers::admin::update_user,
        crate::presentation::http::controllers::admin::change_user_password
    ),
    components(
        schemas(
            StatusResponse,
            ArticlePage,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::account::UpdateProfileRequest,
            crate::presentation::http::controllers::account::ChangeOwnPasswordRequest,
            crate::presentation::http::controllers::account::CreateArticleRequest,
            crate::presentation::http::controllers::account::UpdateArticleRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::categories::UpdateCategoryRequest,
            crate::presentation::http::controllers::admin::BulkStatusRequest,
            crate::presentation::http::controllers::admin::UpdateUserRequest,
            crate::presentation::http::controllers::admin::SetPasswordRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::PopularArticleDto,
            crate::application::dto::BulkStatusResultDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategorySummaryDto,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::Landing,
            crate::domain::article::ArticleStatus,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Blog", description = "Public article listings and reading"),
        (name = "Categories", description = "Category menu and management"),
        (name = "Auth", description = "Registration and sign-in"),
        (name = "Account", description = "Profile and the author dashboard"),
        (name = "Admin", description = "Moderation and user management"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Quillpost API",
        description = "Blog backend with an author and moderator publishing workflow",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            if let Ok(url) = env::var("PUBLIC_API_URL") {
                let sanitized = url.trim().trim_end_matches('/').to_string();
                if !sanitized.is_empty() {
                    urls.push(sanitized);
                }
            }
        }

        if !urls.iter().any(|url| url == "http://localhost:3000") {
            urls.push("http://localhost:3000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = env::var("OPENAPI_SNAPSHOT_PATH")
        .unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

