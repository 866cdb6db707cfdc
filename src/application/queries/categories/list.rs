// src/application/queries/categories/list.rs
use super::CategoryQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::Category,
};

impl CategoryQueryService {
    /// Active categories for visitors, flattened in tree order.
    pub async fn list_active(&self) -> ApplicationResult<Vec<CategoryDto>> {
        self.list(true).await
    }

    pub async fn list_all(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<CategoryDto>> {
        if !actor.has_capability("categories", "manage") {
            return Err(ApplicationError::forbidden(
                "missing capability categories:manage",
            ));
        }
        self.list(false).await
    }

    async fn list(&self, active_only: bool) -> ApplicationResult<Vec<CategoryDto>> {
        let mut categories = self.repo.list(active_only).await?;
        categories.sort_by(Category::listing_order);
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
