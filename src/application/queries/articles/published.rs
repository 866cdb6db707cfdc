// src/application/queries/articles/published.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
    },
    domain::article::{ArticleFilter, ArticleOrdering},
};

#[derive(Debug, Default)]
pub struct ListPublishedQuery {
    pub page: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_published(
        &self,
        query: ListPublishedQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let request = self.blog_page(query.page)?;
        self.page_of(&ArticleFilter::published(), ArticleOrdering::Newest, request)
            .await
    }
}
