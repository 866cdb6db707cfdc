// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleOrdering, ArticleReadRepository,
    ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
    PopularArticle, Thumbnail,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

const ARTICLE_COLUMNS: &str = "a.id, a.author_id, a.title, a.slug, a.body, a.thumbnail, \
     a.publish_at, a.created_at, a.updated_at, a.is_special, a.status, \
     ARRAY(SELECT ac.category_id FROM article_categories ac \
           WHERE ac.article_id = a.id ORDER BY ac.category_id) AS category_ids";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: Option<i64>,
    title: String,
    slug: String,
    body: String,
    thumbnail: String,
    publish_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    is_special: bool,
    status: String,
    category_ids: Vec<i64>,
}

#[derive(Debug, FromRow)]
struct PopularRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    hits: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            author_id: row.author_id.map(UserId::new).transpose()?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.body)?,
            thumbnail: Thumbnail::new(row.thumbnail)?,
            publish_at: row.publish_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            is_special: row.is_special,
            status: ArticleStatus::from_code(&row.status)?,
            category_ids: row
                .category_ids
                .into_iter()
                .map(CategoryId::new)
                .collect::<Result<_, _>>()?,
        })
    }
}

fn category_keys(ids: &[CategoryId]) -> Vec<i64> {
    ids.iter().copied().map(i64::from).collect()
}

async fn fetch_in_tx(tx: &mut Transaction<'_, Postgres>, id: i64) -> DomainResult<Article> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1"
    ))
    .bind(id)
    .fetch_one(&mut **tx)
    .await
    .map_err(map_sqlx)?;
    Article::try_from(row)
}

async fn replace_categories(
    tx: &mut Transaction<'_, Postgres>,
    article_id: i64,
    category_ids: &[CategoryId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_categories WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;

    if category_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO article_categories (article_id, category_id)
         SELECT $1, UNNEST($2::BIGINT[])",
    )
    .bind(article_id)
    .bind(category_keys(category_ids))
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author_id,
            title,
            slug,
            body,
            thumbnail,
            publish_at,
            is_special,
            status,
            category_ids,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles
                (author_id, title, slug, body, thumbnail, publish_at, created_at, updated_at, is_special, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(author_id.map(i64::from))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body.as_str())
        .bind(thumbnail.as_str())
        .bind(publish_at)
        .bind(created_at)
        .bind(updated_at)
        .bind(is_special)
        .bind(status.code())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_categories(&mut tx, id, &category_ids).await?;
        let created = fetch_in_tx(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            author_id,
            title,
            slug,
            body,
            thumbnail,
            publish_at,
            is_special,
            status,
            category_ids,
            original_updated_at,
            updated_at,
        } = update;
        let id = i64::from(id);

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(author_id) = author_id {
            builder.push(", author_id = ");
            builder.push_bind(author_id.map(i64::from));
        }
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }
        if let Some(thumbnail) = thumbnail {
            builder.push(", thumbnail = ");
            builder.push_bind(thumbnail.into_inner());
        }
        if let Some(publish_at) = publish_at {
            builder.push(", publish_at = ");
            builder.push_bind(publish_at);
        }
        if let Some(is_special) = is_special {
            builder.push(", is_special = ");
            builder.push_bind(is_special);
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.code());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING id");

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let touched = builder
            .build_query_scalar::<i64>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if touched.is_none() {
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM articles WHERE id = $1)",
            )
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
            return Err(if exists {
                DomainError::Conflict("article update conflict, please retry".into())
            } else {
                DomainError::NotFound("article not found".into())
            });
        }

        if let Some(category_ids) = category_ids {
            replace_categories(&mut tx, id, &category_ids).await?;
        }
        let updated = fetch_in_tx(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(updated)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn set_status_bulk(
        &self,
        ids: &[ArticleId],
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let keys: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let result = sqlx::query(
            "UPDATE articles SET status = $1, updated_at = $2 WHERE id = ANY($3)",
        )
        .bind(status.code())
        .bind(now)
        .bind(keys)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}

/// Escape LIKE wildcards so user input matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl PostgresArticleReadRepository {
    fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        let mut sep = " WHERE ";

        if let Some(status) = filter.status {
            builder.push(sep).push("a.status = ");
            builder.push_bind(status.code());
            sep = " AND ";
        }
        if let Some(author_id) = filter.author_id {
            builder.push(sep).push("a.author_id = ");
            builder.push_bind(i64::from(author_id));
            sep = " AND ";
        }
        if let Some(category_id) = filter.category_id {
            builder.push(sep).push(
                "EXISTS (SELECT 1 FROM article_categories f \
                 WHERE f.article_id = a.id AND f.category_id = ",
            );
            builder.push_bind(i64::from(category_id));
            builder.push(")");
            sep = " AND ";
        }
        if let Some(term) = filter.search.as_deref() {
            let pattern = like_pattern(term);
            builder.push(sep).push("(a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.body ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    fn push_ordering(builder: &mut QueryBuilder<'_, Postgres>, ordering: ArticleOrdering) {
        builder.push(match ordering {
            ArticleOrdering::Newest => " ORDER BY a.publish_at DESC, a.id DESC",
            ArticleOrdering::Moderation => {
                " ORDER BY a.status DESC, a.publish_at DESC, a.id DESC"
            }
        });
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::push_conditions(&mut builder, filter);
        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(total.max(0) as u64)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        ordering: ArticleOrdering,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let total = self.count(filter).await?;
        if total <= page.offset() {
            return Ok((Vec::new(), total));
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        Self::push_conditions(&mut builder, filter);
        Self::push_ordering(&mut builder, ordering);
        builder.push(" LIMIT ");
        builder.push_bind(page.limit() as i64);
        builder.push(" OFFSET ");
        builder.push_bind(page.offset() as i64);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((articles, total))
    }

    async fn popular(
        &self,
        since: DateTime<Utc>,
        limit: u32,
    ) -> DomainResult<Vec<PopularArticle>> {
        let rows = sqlx::query_as::<_, PopularRow>(&format!(
            "SELECT {ARTICLE_COLUMNS}, COUNT(h.id) FILTER (WHERE h.created_at > $1) AS hits
             FROM articles a
             LEFT JOIN article_hits h ON h.article_id = a.id
             WHERE a.status = 'p'
             GROUP BY a.id
             ORDER BY hits DESC, a.publish_at DESC, a.id DESC
             LIMIT $2"
        ))
        .bind(since)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(PopularArticle {
                    hits: row.hits.max(0) as u64,
                    article: Article::try_from(row.article)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("100%_off"), "%100\\%\\_off%");
    }
}
