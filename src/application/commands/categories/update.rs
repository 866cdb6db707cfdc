// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategorySlug, CategoryTitle, CategoryUpdate},
};

#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    /// `Some(None)` detaches the category from its parent.
    pub parent_id: Option<Option<i64>>,
    pub is_active: Option<bool>,
    pub position: Option<i32>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        Self::ensure_can_manage(actor)?;

        let id = CategoryId::new(command.id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }

        let mut update = CategoryUpdate::new(id);
        if let Some(title) = command.title {
            update = update.with_title(CategoryTitle::new(title)?);
        }
        if let Some(raw) = command.slug.filter(|s| !s.trim().is_empty()) {
            let slug = CategorySlug::new(raw)?;
            self.ensure_slug_free(&slug, Some(id)).await?;
            update = update.with_slug(slug);
        }
        if let Some(parent) = command.parent_id {
            let parent_id = parent.map(CategoryId::new).transpose()?;
            update = update.with_parent(parent_id);
            update.ensure_not_own_parent()?;
            self.ensure_parent_exists(parent_id).await?;
        }
        if let Some(is_active) = command.is_active {
            update = update.with_is_active(is_active);
        }
        if let Some(position) = command.position {
            update = update.with_position(position);
        }

        let updated = self.repo.update(update).await?;
        Ok(updated.into())
    }
}
