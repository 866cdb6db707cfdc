// src/application/commands/articles/moderate.rs
use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, BulkStatusResultDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleStatus},
};

/// Move a selection of articles to one status in a single write.
pub struct BulkSetStatusCommand {
    pub ids: Vec<i64>,
    pub status: ArticleStatus,
}

impl ArticleCommandService {
    pub async fn bulk_set_status(
        &self,
        actor: &AuthenticatedUser,
        command: BulkSetStatusCommand,
    ) -> ApplicationResult<BulkStatusResultDto> {
        ensure_capability(actor, "articles", "publish")?;

        if command.ids.is_empty() {
            return Err(ApplicationError::validation("no articles selected"));
        }
        let mut ids = command
            .ids
            .into_iter()
            .map(ArticleId::new)
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort();
        ids.dedup();

        let now = self.clock.now();
        let updated = self
            .write_repo
            .set_status_bulk(&ids, command.status, now)
            .await?;

        tracing::info!(
            actor = %actor.username,
            status = %command.status,
            requested = ids.len(),
            updated,
            "bulk status change"
        );
        Ok(BulkStatusResultDto::new(updated, command.status))
    }
}
