use crate::domain::article::{Article, ArticleStatus, PopularArticle};
use crate::domain::category::{Category, CategoryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use super::{categories::CategorySummaryDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub author_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub thumbnail: String,
    #[serde(with = "serde_time")]
    pub publish_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub is_special: bool,
    pub status: ArticleStatus,
    /// Active categories only, in listing order.
    pub categories: Vec<CategorySummaryDto>,
    /// Titles of `categories` joined with ", ".
    pub category_label: String,
}

impl ArticleDto {
    /// Build the DTO, resolving category ids through `categories`. Ids that
    /// are missing from the map or point at inactive categories are left out.
    pub fn from_parts(article: Article, categories: &HashMap<CategoryId, Category>) -> Self {
        let mut attached: Vec<&Category> = article
            .category_ids
            .iter()
            .filter_map(|id| categories.get(id))
            .filter(|category| category.is_active)
            .collect();
        attached.sort_by(|a, b| Category::listing_order(a, b));

        let summaries: Vec<CategorySummaryDto> = attached
            .into_iter()
            .map(CategorySummaryDto::from)
            .collect();
        let category_label = summaries
            .iter()
            .map(|c| c.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: article.id.into(),
            author_id: article.author_id.map(Into::into),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            body: article.body.into_inner(),
            thumbnail: article.thumbnail.into_inner(),
            publish_at: article.publish_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            is_special: article.is_special,
            status: article.status,
            categories: summaries,
            category_label,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    /// Distinct visitor addresses that have opened the article.
    pub hits: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PopularArticleDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    /// Hits inside the popularity window.
    pub hits: u64,
}

impl PopularArticleDto {
    pub fn from_parts(popular: PopularArticle, categories: &HashMap<CategoryId, Category>) -> Self {
        Self {
            article: ArticleDto::from_parts(popular.article, categories),
            hits: popular.hits,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkStatusResultDto {
    pub updated: u64,
    pub status: ArticleStatus,
    pub message: String,
}

impl BulkStatusResultDto {
    pub fn new(updated: u64, status: ArticleStatus) -> Self {
        let noun = if updated == 1 { "article" } else { "articles" };
        let outcome = match status {
            ArticleStatus::Published => "published",
            ArticleStatus::Draft => "moved to draft",
            ArticleStatus::Investigation => "sent for review",
            ArticleStatus::Returned => "returned to their authors",
        };
        Self {
            updated,
            status,
            message: format!("{updated} {noun} {outcome}"),
        }
    }
}
