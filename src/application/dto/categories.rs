use crate::domain::category::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub is_active: bool,
    pub position: i32,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            parent_id: category.parent_id.map(Into::into),
            title: category.title.into_inner(),
            slug: category.slug.into_inner(),
            is_active: category.is_active,
            position: category.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

impl From<&Category> for CategorySummaryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.into(),
            title: category.title.as_str().to_string(),
            slug: category.slug.as_str().to_string(),
        }
    }
}
