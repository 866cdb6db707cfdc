// src/application/queries/articles/search.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleFilter, ArticleOrdering},
};

pub struct SearchArticlesQuery {
    pub q: String,
    pub page: Option<u32>,
}

impl ArticleQueryService {
    pub async fn search(&self, query: SearchArticlesQuery) -> ApplicationResult<Page<ArticleDto>> {
        let term = query.q.trim();
        if term.is_empty() {
            return Err(ApplicationError::validation("search query must not be empty"));
        }

        let request = self.blog_page(query.page)?;
        let filter = ArticleFilter::published().with_search(term);
        self.page_of(&filter, ArticleOrdering::Newest, request).await
    }
}
