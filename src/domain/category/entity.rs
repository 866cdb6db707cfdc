use crate::domain::category::value_objects::{CategoryId, CategorySlug, CategoryTitle};
use crate::domain::errors::{DomainError, DomainResult};
use std::cmp::Ordering;

/// Article classification. Categories nest through `parent_id`; inactive
/// categories stay attached to articles but are hidden from visitors.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub parent_id: Option<CategoryId>,
    pub title: CategoryTitle,
    pub slug: CategorySlug,
    pub is_active: bool,
    pub position: i32,
}

impl Category {
    /// Listing order: top-level categories first, then by parent id, then by
    /// position within a parent.
    pub fn listing_order(a: &Category, b: &Category) -> Ordering {
        let parent_key = |c: &Category| c.parent_id.map(i64::from);
        parent_key(a)
            .cmp(&parent_key(b))
            .then_with(|| a.position.cmp(&b.position))
            .then_with(|| a.id.cmp(&b.id))
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub parent_id: Option<CategoryId>,
    pub title: CategoryTitle,
    pub slug: CategorySlug,
    pub is_active: bool,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub parent_id: Option<Option<CategoryId>>,
    pub title: Option<CategoryTitle>,
    pub slug: Option<CategorySlug>,
    pub is_active: Option<bool>,
    pub position: Option<i32>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId) -> Self {
        Self {
            id,
            parent_id: None,
            title: None,
            slug: None,
            is_active: None,
            position: None,
        }
    }

    pub fn with_parent(mut self, parent_id: Option<CategoryId>) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_title(mut self, title: CategoryTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: CategorySlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn ensure_not_own_parent(&self) -> DomainResult<()> {
        if self.parent_id == Some(Some(self.id)) {
            return Err(DomainError::Validation(
                "a category cannot be its own parent".into(),
            ));
        }
        Ok(())
    }

    pub fn apply_to(&self, category: &mut Category) {
        if let Some(parent_id) = self.parent_id {
            category.parent_id = parent_id;
        }
        if let Some(title) = &self.title {
            category.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            category.slug = slug.clone();
        }
        if let Some(is_active) = self.is_active {
            category.is_active = is_active;
        }
        if let Some(position) = self.position {
            category.position = position;
        }
    }
}
