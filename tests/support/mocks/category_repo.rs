// tests/support/mocks/category_repo.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use quillpost::domain::category::{
    Category, CategoryId, CategoryRepository, CategorySlug, CategoryUpdate, NewCategory,
};
use quillpost::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
pub struct InMemoryCategoryRepo {
    categories: Mutex<BTreeMap<i64, Category>>,
}

impl InMemoryCategoryRepo {
    pub fn put(&self, category: Category) {
        self.categories
            .lock()
            .unwrap()
            .insert(category.id.0, category);
    }

    pub fn get(&self, id: i64) -> Option<Category> {
        self.categories.lock().unwrap().get(&id).cloned()
    }

    fn slug_taken(map: &BTreeMap<i64, Category>, slug: &CategorySlug, except: Option<i64>) -> bool {
        map.values()
            .any(|c| &c.slug == slug && Some(c.id.0) != except)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut map = self.categories.lock().unwrap();
        if Self::slug_taken(&map, &category.slug, None) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let id = map.keys().next_back().copied().unwrap_or(0) + 1;
        let created = Category {
            id: CategoryId::new(id)?,
            parent_id: category.parent_id,
            title: category.title,
            slug: category.slug,
            is_active: category.is_active,
            position: category.position,
        };
        map.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut map = self.categories.lock().unwrap();
        if let Some(slug) = &update.slug {
            if Self::slug_taken(&map, slug, Some(update.id.0)) {
                return Err(DomainError::Conflict("category slug already exists".into()));
            }
        }
        let category = map
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        update.apply_to(category);
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut map = self.categories.lock().unwrap();
        if map.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("category not found".into()));
        }
        for child in map.values_mut() {
            if child.parent_id == Some(id) {
                child.parent_id = None;
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.categories.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let map = self.categories.lock().unwrap();
        Ok(map.values().find(|c| &c.slug == slug).cloned())
    }

    async fn list(&self, active_only: bool) -> DomainResult<Vec<Category>> {
        let map = self.categories.lock().unwrap();
        let mut items: Vec<Category> = map
            .values()
            .filter(|c| !active_only || c.is_active)
            .cloned()
            .collect();
        items.sort_by(Category::listing_order);
        Ok(items)
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let map = self.categories.lock().unwrap();
        Ok(ids.iter().filter_map(|id| map.get(&id.0).cloned()).collect())
    }
}
