use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::hit::value_objects::ClientAddress;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleHitRepository: Send + Sync {
    /// Record a view of `article_id` from `address`. Returns `true` only for
    /// the first view from that address.
    async fn record(
        &self,
        article_id: ArticleId,
        address: ClientAddress,
        at: DateTime<Utc>,
    ) -> DomainResult<bool>;

    async fn count_for(&self, article_id: ArticleId) -> DomainResult<u64>;
}
