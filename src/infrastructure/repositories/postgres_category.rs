// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryRepository, CategorySlug, CategoryTitle, CategoryUpdate,
    NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    parent_id: Option<i64>,
    title: String,
    slug: String,
    is_active: bool,
    position: i32,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            parent_id: row.parent_id.map(CategoryId::new).transpose()?,
            title: CategoryTitle::new(row.title)?,
            slug: CategorySlug::new(row.slug)?,
            is_active: row.is_active,
            position: row.position,
        })
    }
}

fn collect(rows: Vec<CategoryRow>) -> DomainResult<Vec<Category>> {
    rows.into_iter().map(Category::try_from).collect()
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (parent_id, title, slug, is_active, position)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, parent_id, title, slug, is_active, position",
        )
        .bind(category.parent_id.map(i64::from))
        .bind(category.title.as_str())
        .bind(category.slug.as_str())
        .bind(category.is_active)
        .bind(category.position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        update.ensure_not_own_parent()?;
        let CategoryUpdate {
            id,
            parent_id,
            title,
            slug,
            is_active,
            position,
        } = update;

        // `id = id` keeps the SET list valid when nothing else changes.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE categories SET id = id");
        if let Some(parent_id) = parent_id {
            builder.push(", parent_id = ");
            builder.push_bind(parent_id.map(i64::from));
        }
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }
        if let Some(position) = position {
            builder.push(", position = ");
            builder.push_bind(position);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, parent_id, title, slug, is_active, position");

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, parent_id, title, slug, is_active, position
             FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, parent_id, title, slug, is_active, position
             FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self, active_only: bool) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, parent_id, title, slug, is_active, position
             FROM categories
             WHERE is_active OR NOT $1
             ORDER BY parent_id NULLS FIRST, position, id",
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect(rows)
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let keys: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, parent_id, title, slug, is_active, position
             FROM categories WHERE id = ANY($1)
             ORDER BY parent_id NULLS FIRST, position, id",
        )
        .bind(keys)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect(rows)
    }
}
