// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        category::{CategoryId, CategoryRepository},
        user::{UserId, UserRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            user_repo,
            slug_service,
            clock,
        }
    }

    /// Validate the requested category ids against the store, keeping the
    /// caller's order and dropping duplicates.
    pub(super) async fn resolve_categories(
        &self,
        raw_ids: Vec<i64>,
    ) -> ApplicationResult<Vec<CategoryId>> {
        let mut ids: Vec<CategoryId> = Vec::with_capacity(raw_ids.len());
        for raw in raw_ids {
            let id = CategoryId::new(raw)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        if ids.is_empty() {
            return Ok(ids);
        }

        let found = self.category_repo.find_by_ids(&ids).await?;
        if let Some(missing) = ids
            .iter()
            .find(|id| !found.iter().any(|category| category.id == **id))
        {
            return Err(ApplicationError::validation(format!(
                "category {} does not exist",
                missing.0
            )));
        }
        Ok(ids)
    }

    /// The author recorded for a save. Only actors allowed to assign authors
    /// may name someone else; everyone else is recorded as the author.
    pub(super) async fn resolve_author(
        &self,
        actor: &AuthenticatedUser,
        requested: Option<i64>,
    ) -> ApplicationResult<UserId> {
        match requested {
            Some(raw) if actor.has_capability("articles", "assign_author") => {
                let id = UserId::new(raw)?;
                if self.user_repo.find_by_id(id).await?.is_none() {
                    return Err(ApplicationError::validation(format!(
                        "author {raw} does not exist"
                    )));
                }
                Ok(id)
            }
            _ => Ok(actor.id),
        }
    }

    pub(super) async fn ensure_slug_available(
        &self,
        slug: &ArticleSlug,
        ignore_id: Option<ArticleId>,
    ) -> ApplicationResult<()> {
        if self.slug_service.is_available(slug, ignore_id).await? {
            Ok(())
        } else {
            Err(ApplicationError::conflict(format!(
                "slug '{slug}' is already in use"
            )))
        }
    }
}
