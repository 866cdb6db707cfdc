// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, Thumbnail,
};
use crate::domain::category::CategoryId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    /// `None` once the author account has been removed.
    pub author_id: Option<UserId>,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub thumbnail: Thumbnail,
    pub publish_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_special: bool,
    pub status: ArticleStatus,
    pub category_ids: Vec<CategoryId>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == Some(user_id)
    }

    pub fn set_status(&mut self, status: ArticleStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: ArticleSlug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: Option<UserId>,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub thumbnail: Thumbnail,
    pub publish_at: DateTime<Utc>,
    pub is_special: bool,
    pub status: ArticleStatus,
    pub category_ids: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of an article. `original_updated_at` guards against
/// concurrent edits: the write only applies while the stored row still
/// carries that timestamp.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub author_id: Option<Option<UserId>>,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub body: Option<ArticleBody>,
    pub thumbnail: Option<Thumbnail>,
    pub publish_at: Option<DateTime<Utc>>,
    pub is_special: Option<bool>,
    pub status: Option<ArticleStatus>,
    pub category_ids: Option<Vec<CategoryId>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author_id: None,
            title: None,
            slug: None,
            body: None,
            thumbnail: None,
            publish_at: None,
            is_special: None,
            status: None,
            category_ids: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_author(mut self, author_id: Option<UserId>) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn with_publish_at(mut self, publish_at: DateTime<Utc>) -> Self {
        self.publish_at = Some(publish_at);
        self
    }

    pub fn with_is_special(mut self, is_special: bool) -> Self {
        self.is_special = Some(is_special);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_categories(mut self, category_ids: Vec<CategoryId>) -> Self {
        self.category_ids = Some(category_ids);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    /// Apply the changes to an in-memory copy of the article.
    pub fn apply_to(&self, article: &mut Article) {
        if let Some(author_id) = self.author_id {
            article.author_id = author_id;
        }
        if let Some(title) = &self.title {
            article.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            article.slug = slug.clone();
        }
        if let Some(body) = &self.body {
            article.body = body.clone();
        }
        if let Some(thumbnail) = &self.thumbnail {
            article.thumbnail = thumbnail.clone();
        }
        if let Some(publish_at) = self.publish_at {
            article.publish_at = publish_at;
        }
        if let Some(is_special) = self.is_special {
            article.is_special = is_special;
        }
        if let Some(status) = self.status {
            article.status = status;
        }
        if let Some(category_ids) = &self.category_ids {
            article.category_ids = category_ids.clone();
        }
        article.updated_at = self.updated_at;
    }
}
