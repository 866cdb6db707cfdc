// src/application/queries/articles/detail.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
        services::article_dto,
    },
    domain::{article::ArticleSlug, hit::ClientAddress},
};

pub struct ArticleDetailQuery {
    pub slug: String,
    /// Visitor address; no hit is recorded when it is unknown.
    pub client: Option<ClientAddress>,
}

impl ArticleQueryService {
    pub async fn article_detail(
        &self,
        query: ArticleDetailQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|article| article.is_published())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if let Some(client) = query.client {
            let first_visit = self
                .hit_repo
                .record(article.id, client, self.clock.now())
                .await?;
            if first_visit {
                tracing::debug!(article_id = article.id.0, %client, "hit recorded");
            }
        }

        let hits = self.hit_repo.count_for(article.id).await?;
        let article = article_dto(self.category_repo.as_ref(), article).await?;
        Ok(ArticleDetailDto { article, hits })
    }
}
