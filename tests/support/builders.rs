// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use quillpost::domain::article::*;
use quillpost::domain::category::{Category, CategoryId, CategorySlug, CategoryTitle};
use quillpost::domain::user::{Email, PasswordHash, Role, User, UserId, Username};

use super::mocks::{fixed_now, hashed};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
    status: ArticleStatus,
    author_id: Option<i64>,
    category_ids: Vec<i64>,
    publish_at: DateTime<Utc>,
    is_special: bool,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            slug: format!("article-{id}"),
            body: "Lorem ipsum dolor sit amet".into(),
            status: ArticleStatus::Published,
            author_id: Some(super::mocks::AUTHOR_ID),
            category_ids: Vec::new(),
            // later ids publish later, so "newest first" is descending id
            publish_at: fixed_now() - Duration::days(30) + Duration::hours(id),
            is_special: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn draft(self) -> Self {
        self.status(ArticleStatus::Draft)
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn orphan(mut self) -> Self {
        self.author_id = None;
        self
    }

    pub fn categories(mut self, ids: &[i64]) -> Self {
        self.category_ids = ids.to_vec();
        self
    }

    pub fn publish_at(mut self, at: DateTime<Utc>) -> Self {
        self.publish_at = at;
        self
    }

    pub fn special(mut self) -> Self {
        self.is_special = true;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            author_id: self.author_id.map(|id| UserId::new(id).unwrap()),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            thumbnail: Thumbnail::new(format!("images/{}.png", self.id)).unwrap(),
            publish_at: self.publish_at,
            created_at: self.publish_at,
            updated_at: self.publish_at,
            is_special: self.is_special,
            status: self.status,
            category_ids: self
                .category_ids
                .into_iter()
                .map(|id| CategoryId::new(id).unwrap())
                .collect(),
        }
    }
}

pub struct CategoryBuilder {
    id: i64,
    title: String,
    slug: String,
    parent_id: Option<i64>,
    is_active: bool,
    position: i32,
}

impl CategoryBuilder {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id,
            slug: slug::slugify(&title),
            title,
            parent_id: None,
            is_active: true,
            position: 0,
        }
    }

    pub fn parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn build(self) -> Category {
        Category {
            id: CategoryId::new(self.id).unwrap(),
            parent_id: self.parent_id.map(|id| CategoryId::new(id).unwrap()),
            title: CategoryTitle::new(self.title).unwrap(),
            slug: CategorySlug::new(self.slug).unwrap(),
            is_active: self.is_active,
            position: self.position,
        }
    }
}

/// Account whose password is `password` under [`super::mocks::StrictPasswordHasher`].
pub fn user(id: i64, username: &str, role: Role, password: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        email: Some(Email::new(format!("{username}@example.com")).unwrap()),
        first_name: String::new(),
        last_name: String::new(),
        password_hash: PasswordHash::new(hashed(password)).unwrap(),
        role,
        is_active: true,
        created_at: fixed_now() - Duration::days(365),
    }
}
