// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::{CategoryId, CategoryTitle, NewCategory},
};

pub struct CreateCategoryCommand {
    pub title: String,
    pub slug: Option<String>,
    pub parent_id: Option<i64>,
    pub is_active: bool,
    pub position: i32,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        Self::ensure_can_manage(actor)?;

        let title = CategoryTitle::new(command.title)?;
        let slug = self.slug_for(command.slug, title.as_str())?;
        self.ensure_slug_free(&slug, None).await?;

        let parent_id = command.parent_id.map(CategoryId::new).transpose()?;
        self.ensure_parent_exists(parent_id).await?;

        let created = self
            .repo
            .insert(NewCategory {
                parent_id,
                title,
                slug,
                is_active: command.is_active,
                position: command.position,
            })
            .await?;
        tracing::info!(category_id = created.id.0, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
