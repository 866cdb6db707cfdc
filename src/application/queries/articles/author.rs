// src/application/queries/articles/author.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleOrdering},
        user::Username,
    },
};

pub struct AuthorArticlesQuery {
    pub username: String,
    pub page: Option<u32>,
}

impl ArticleQueryService {
    pub async fn author_articles(
        &self,
        query: AuthorArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let username = Username::new(query.username)
            .map_err(|_| ApplicationError::not_found("author not found"))?;
        let author = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        let request = self.blog_page(query.page)?;
        let filter = ArticleFilter::published().with_author(author.id);
        self.page_of(&filter, ArticleOrdering::Newest, request).await
    }
}
