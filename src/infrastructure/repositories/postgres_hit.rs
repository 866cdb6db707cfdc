// src/infrastructure/repositories/postgres_hit.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::hit::{ArticleHitRepository, ClientAddress};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Visitor addresses live in their own table; a hit links an article to an
/// address at most once.
#[derive(Clone)]
pub struct PostgresArticleHitRepository {
    pool: PgPool,
}

impl PostgresArticleHitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleHitRepository for PostgresArticleHitRepository {
    async fn record(
        &self,
        article_id: ArticleId,
        address: ClientAddress,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let address_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO ip_addresses (ip) VALUES ($1)
             ON CONFLICT (ip) DO UPDATE SET ip = EXCLUDED.ip
             RETURNING id",
        )
        .bind(address.to_string())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let inserted = sqlx::query(
            "INSERT INTO article_hits (article_id, ip_address_id, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (article_id, ip_address_id) DO NOTHING",
        )
        .bind(i64::from(article_id))
        .bind(address_id)
        .bind(at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        tx.commit().await.map_err(map_sqlx)?;
        Ok(inserted == 1)
    }

    async fn count_for(&self, article_id: ArticleId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM article_hits WHERE article_id = $1")
            .bind(i64::from(article_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }
}
