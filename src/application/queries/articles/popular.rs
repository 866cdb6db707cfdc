// src/application/queries/articles/popular.rs
use chrono::{DateTime, Utc};

use super::ArticleQueryService;
use crate::application::{
    dto::PopularArticleDto,
    error::{ApplicationError, ApplicationResult},
    services::category_map,
};

pub const DEFAULT_POPULAR_LIMIT: u32 = 10;
pub const MAX_POPULAR_LIMIT: u32 = 1000;

#[derive(Debug, Default)]
pub struct PopularArticlesQuery {
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    /// Published articles ranked by hits inside the popularity window.
    pub async fn popular(
        &self,
        query: PopularArticlesQuery,
    ) -> ApplicationResult<Vec<PopularArticleDto>> {
        let limit = query.limit.unwrap_or(DEFAULT_POPULAR_LIMIT);
        if limit == 0 {
            return Err(ApplicationError::validation("limit must be positive"));
        }
        let limit = limit.min(MAX_POPULAR_LIMIT);

        let since = self
            .clock
            .now()
            .checked_sub_signed(self.settings.popular_window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let ranked = self.read_repo.popular(since, limit).await?;

        let refs: Vec<_> = ranked.iter().map(|p| &p.article).collect();
        let categories = category_map(self.category_repo.as_ref(), &refs).await?;
        Ok(ranked
            .into_iter()
            .map(|p| PopularArticleDto::from_parts(p, &categories))
            .collect())
    }
}
