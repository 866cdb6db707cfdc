use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleStatus};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Row filter for article listings. Every populated field narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub author_id: Option<UserId>,
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring matched against the title or the body.
    pub search: Option<String>,
}

impl ArticleFilter {
    pub fn published() -> Self {
        Self {
            status: Some(ArticleStatus::Published),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: Option<ArticleStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        if let Some(status) = self.status {
            if article.status != status {
                return false;
            }
        }
        if let Some(author_id) = self.author_id {
            if !article.is_authored_by(author_id) {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if !article.category_ids.contains(&category_id) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_title = article.title.as_str().to_lowercase().contains(&needle);
            let in_body = article.body.as_str().to_lowercase().contains(&needle);
            if !in_title && !in_body {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleOrdering {
    /// Most recent publish time first.
    #[default]
    Newest,
    /// Moderation queue: by status code descending, then newest first.
    Moderation,
}

#[derive(Debug, Clone)]
pub struct PopularArticle {
    pub article: Article,
    pub hits: u64,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Move every listed article to `status`, returning the rows touched.
    async fn set_status_bulk(
        &self,
        ids: &[ArticleId],
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        ordering: ArticleOrdering,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)>;
    /// Published articles ranked by hits recorded after `since`.
    async fn popular(&self, since: DateTime<Utc>, limit: u32)
    -> DomainResult<Vec<PopularArticle>>;
}
