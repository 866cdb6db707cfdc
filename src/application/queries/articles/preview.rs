// src/application/queries/articles/preview.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        services::article_dto,
    },
    domain::article::{
        ArticleId,
        specifications::{ArticleSpecification, CanEditArticleSpec},
    },
};

pub struct PreviewArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Any status is visible to those who may edit the article.
    pub async fn preview(
        &self,
        actor: &AuthenticatedUser,
        query: PreviewArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|article| {
                CanEditArticleSpec::new(&actor.capabilities, article, actor.id).is_satisfied()
            })
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        article_dto(self.category_repo.as_ref(), article).await
    }
}
