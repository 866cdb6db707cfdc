// src/application/queries/articles/category.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleOrdering},
        category::CategorySlug,
    },
};

pub struct CategoryArticlesQuery {
    pub slug: String,
    pub page: Option<u32>,
}

impl ArticleQueryService {
    /// Published articles filed under an active category.
    pub async fn category_articles(
        &self,
        query: CategoryArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let slug = CategorySlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .category_repo
            .find_by_slug(&slug)
            .await?
            .filter(|category| category.is_active)
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let request = self.blog_page(query.page)?;
        let filter = ArticleFilter::published().with_category(category.id);
        self.page_of(&filter, ArticleOrdering::Newest, request).await
    }
}
