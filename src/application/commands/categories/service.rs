// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::util::SlugGenerator,
    },
    domain::category::{CategoryId, CategoryRepository, CategorySlug},
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, slugger }
    }

    pub(super) fn ensure_can_manage(actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if actor.has_capability("categories", "manage") {
            Ok(())
        } else {
            Err(ApplicationError::forbidden(
                "missing capability categories:manage",
            ))
        }
    }

    /// Use the caller's slug when given, otherwise slugify the title.
    pub(super) fn slug_for(
        &self,
        explicit: Option<String>,
        title: &str,
    ) -> ApplicationResult<CategorySlug> {
        let raw = match explicit.filter(|s| !s.trim().is_empty()) {
            Some(slug) => slug,
            None => self.slugger.slugify(title),
        };
        if raw.is_empty() {
            return Err(ApplicationError::validation(
                "a slug could not be derived from the title",
            ));
        }
        Ok(CategorySlug::new(raw)?)
    }

    pub(super) async fn ensure_slug_free(
        &self,
        slug: &CategorySlug,
        ignore_id: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        match self.repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != ignore_id => Err(ApplicationError::conflict(
                format!("category slug '{slug}' is already in use"),
            )),
            _ => Ok(()),
        }
    }

    pub(super) async fn ensure_parent_exists(
        &self,
        parent_id: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        if let Some(parent_id) = parent_id {
            if self.repo.find_by_id(parent_id).await?.is_none() {
                return Err(ApplicationError::validation(format!(
                    "parent category {} does not exist",
                    parent_id.0
                )));
            }
        }
        Ok(())
    }
}
