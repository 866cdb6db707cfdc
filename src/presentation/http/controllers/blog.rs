// src/presentation/http/controllers/blog.rs
use crate::application::{
    dto::{ArticleDetailDto, ArticleDto, Page, PopularArticleDto},
    queries::articles::{
        ArticleDetailQuery, AuthorArticlesQuery, CategoryArticlesQuery, ListPublishedQuery,
        PopularArticlesQuery, PreviewArticleQuery, SearchArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientIp, PathParam, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number; defaults to the first page.
    pub page: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PopularParams {
    /// Number of articles, 10 by default and at most 1000.
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive text matched against titles and bodies.
    #[serde(default)]
    pub q: String,
    pub page: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(PageParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = crate::presentation::http::openapi::ArticlePage),
        (status = 400, description = "Invalid page number.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Page past the end of the listing.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn list_published(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<PageParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_published(ListPublishedQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/popular",
    params(PopularParams),
    responses(
        (status = 200, description = "Published articles ranked by recent hits.", body = [PopularArticleDto]),
        (status = 400, description = "Invalid limit.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn popular(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<PopularParams>,
) -> HttpResult<Json<Vec<PopularArticleDto>>> {
    state
        .services
        .article_queries
        .popular(PopularArticlesQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching published articles.", body = crate::presentation::http::openapi::ArticlePage),
        (status = 400, description = "Blank query or invalid page.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Page past the end of the results.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<SearchParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .search(SearchArticlesQuery {
            q: params.q,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Published article with its hit count. Records a hit for the caller.", body = ArticleDetailDto),
        (status = 404, description = "No published article with that slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn article_detail(
    Extension(state): Extension<HttpState>,
    ClientIp(client): ClientIp,
    PathParam(slug): PathParam<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .article_detail(ArticleDetailQuery { slug, client })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/preview",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article in any status.", body = ArticleDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Missing, or not editable by the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blog"
)]
pub async fn preview(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .preview(&user, PreviewArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}/articles",
    params(("slug" = String, Path, description = "Category slug"), PageParams),
    responses(
        (status = 200, description = "Published articles in an active category.", body = crate::presentation::http::openapi::ArticlePage),
        (status = 404, description = "Unknown or inactive category, or page past the end.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn category_articles(
    Extension(state): Extension<HttpState>,
    PathParam(slug): PathParam<String>,
    QueryParams(params): QueryParams<PageParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .category_articles(CategoryArticlesQuery {
            slug,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/authors/{username}/articles",
    params(("username" = String, Path, description = "Author username"), PageParams),
    responses(
        (status = 200, description = "Published articles by the author.", body = crate::presentation::http::openapi::ArticlePage),
        (status = 404, description = "Unknown author, or page past the end.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn author_articles(
    Extension(state): Extension<HttpState>,
    PathParam(username): PathParam<String>,
    QueryParams(params): QueryParams<PageParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .author_articles(AuthorArticlesQuery {
            username,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}
