// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleId,
        specifications::{ArticleSpecification, CanDeleteArticleSpec},
    },
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !CanDeleteArticleSpec::new(&actor.capabilities).is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }

        self.write_repo.delete(article.id).await?;
        tracing::info!(article_id = id.0, actor = %actor.username, "article deleted");
        Ok(())
    }
}
