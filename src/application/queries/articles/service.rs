// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
        ports::time::Clock,
        services::{BlogSettings, article_dtos},
    },
    domain::{
        article::{ArticleFilter, ArticleOrdering, ArticleReadRepository},
        category::CategoryRepository,
        hit::ArticleHitRepository,
        pagination::PageRequest,
        user::UserRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) hit_repo: Arc<dyn ArticleHitRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: BlogSettings,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        hit_repo: Arc<dyn ArticleHitRepository>,
        clock: Arc<dyn Clock>,
        settings: BlogSettings,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            user_repo,
            hit_repo,
            clock,
            settings,
        }
    }

    pub(super) fn blog_page(&self, page: Option<u32>) -> ApplicationResult<PageRequest> {
        Ok(PageRequest::new(page.unwrap_or(1), self.settings.page_size)?)
    }

    /// Fetch one page, rejecting page numbers past the end of the listing.
    pub(super) async fn page_of(
        &self,
        filter: &ArticleFilter,
        ordering: ArticleOrdering,
        request: PageRequest,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let (articles, total) = self.read_repo.list_page(filter, ordering, request).await?;
        request.ensure_in_range(total)?;
        let items = article_dtos(self.category_repo.as_ref(), articles).await?;
        Ok(Page::new(items, request, total))
    }
}
