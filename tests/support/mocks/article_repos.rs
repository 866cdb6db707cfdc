// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use quillpost::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleOrdering, ArticleReadRepository, ArticleSlug,
    ArticleStatus, ArticleUpdate, ArticleWriteRepository, NewArticle, PopularArticle,
};
use quillpost::domain::errors::{DomainError, DomainResult};
use quillpost::domain::hit::{ArticleHitRepository, ClientAddress};
use quillpost::domain::pagination::PageRequest;

/* -------------------------------- Hits -------------------------------- */

#[derive(Default)]
pub struct InMemoryHitRepo {
    hits: Mutex<Vec<(ArticleId, ClientAddress, DateTime<Utc>)>>,
}

impl InMemoryHitRepo {
    pub fn put(&self, article_id: ArticleId, address: ClientAddress, at: DateTime<Utc>) {
        self.hits.lock().unwrap().push((article_id, address, at));
    }

    pub fn total(&self) -> usize {
        self.hits.lock().unwrap().len()
    }

    fn count_since(&self, article_id: ArticleId, since: DateTime<Utc>) -> u64 {
        self.hits
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _, at)| *id == article_id && *at > since)
            .count() as u64
    }
}

#[async_trait]
impl ArticleHitRepository for InMemoryHitRepo {
    async fn record(
        &self,
        article_id: ArticleId,
        address: ClientAddress,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let mut hits = self.hits.lock().unwrap();
        if hits
            .iter()
            .any(|(id, addr, _)| *id == article_id && *addr == address)
        {
            return Ok(false);
        }
        hits.push((article_id, address, at));
        Ok(true)
    }

    async fn count_for(&self, article_id: ArticleId) -> DomainResult<u64> {
        let hits = self.hits.lock().unwrap();
        Ok(hits.iter().filter(|(id, _, _)| *id == article_id).count() as u64)
    }
}

/* -------------------------------- Articles -------------------------------- */

/// Backs both article repository traits, so writes are visible to reads.
pub struct InMemoryArticleRepo {
    articles: Mutex<BTreeMap<i64, Article>>,
    hits: Arc<InMemoryHitRepo>,
}

impl InMemoryArticleRepo {
    pub fn new(hits: Arc<InMemoryHitRepo>) -> Self {
        Self {
            articles: Mutex::new(BTreeMap::new()),
            hits,
        }
    }

    pub fn put(&self, article: Article) {
        self.articles.lock().unwrap().insert(article.id.0, article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.articles.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    fn slug_taken(map: &BTreeMap<i64, Article>, slug: &ArticleSlug, except: Option<i64>) -> bool {
        map.values()
            .any(|a| &a.slug == slug && Some(a.id.0) != except)
    }
}

fn newest_first(a: &Article, b: &Article) -> std::cmp::Ordering {
    b.publish_at.cmp(&a.publish_at).then_with(|| b.id.cmp(&a.id))
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut map = self.articles.lock().unwrap();
        if Self::slug_taken(&map, &article.slug, None) {
            return Err(DomainError::Conflict("article slug already exists".into()));
        }
        let id = map.keys().next_back().copied().unwrap_or(0) + 1;
        let created = Article {
            id: ArticleId::new(id)?,
            author_id: article.author_id,
            title: article.title,
            slug: article.slug,
            body: article.body,
            thumbnail: article.thumbnail,
            publish_at: article.publish_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            is_special: article.is_special,
            status: article.status,
            category_ids: article.category_ids,
        };
        map.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut map = self.articles.lock().unwrap();
        if let Some(slug) = &update.slug {
            if Self::slug_taken(&map, slug, Some(update.id.0)) {
                return Err(DomainError::Conflict("article slug already exists".into()));
            }
        }
        let article = map
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if article.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article was modified concurrently".into(),
            ));
        }
        update.apply_to(article);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        match self.articles.lock().unwrap().remove(&id.0) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound("article not found".into())),
        }
    }

    async fn set_status_bulk(
        &self,
        ids: &[ArticleId],
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut map = self.articles.lock().unwrap();
        let mut touched = 0;
        for id in ids {
            if let Some(article) = map.get_mut(&id.0) {
                article.set_status(status, now);
                touched += 1;
            }
        }
        Ok(touched)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let map = self.articles.lock().unwrap();
        Ok(map.values().find(|a| &a.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        ordering: ArticleOrdering,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let map = self.articles.lock().unwrap();
        let mut items: Vec<Article> = map.values().filter(|a| filter.matches(a)).cloned().collect();
        match ordering {
            ArticleOrdering::Newest => items.sort_by(newest_first),
            ArticleOrdering::Moderation => items.sort_by(|a, b| {
                b.status
                    .code()
                    .cmp(a.status.code())
                    .then_with(|| newest_first(a, b))
            }),
        }
        let total = items.len() as u64;
        let items = items
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((items, total))
    }

    async fn popular(
        &self,
        since: DateTime<Utc>,
        limit: u32,
    ) -> DomainResult<Vec<PopularArticle>> {
        let published: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.is_published())
            .cloned()
            .collect();
        let mut ranked: Vec<PopularArticle> = published
            .into_iter()
            .map(|article| PopularArticle {
                hits: self.hits.count_since(article.id, since),
                article,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.hits
                .cmp(&a.hits)
                .then_with(|| newest_first(&a.article, &b.article))
        });
        ranked.truncate(limit as usize);
        Ok(ranked)
    }
}
