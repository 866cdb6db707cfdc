// src/application/commands/articles/create.rs
use chrono::{DateTime, Utc};

use super::{ArticleCommandService, capability::ensure_dashboard_access};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        services::article_dto,
    },
    domain::article::{
        ArticleBody, ArticleSlug, ArticleStatus, ArticleTitle, NewArticle, Thumbnail,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub slug: Option<String>,
    pub body: String,
    pub thumbnail: String,
    pub category_ids: Vec<i64>,
    pub publish_at: Option<DateTime<Utc>>,
    pub is_special: bool,
    pub status: ArticleStatus,
    pub author_id: Option<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    body: Option<String>,
    thumbnail: Option<String>,
    category_ids: Vec<i64>,
    publish_at: Option<DateTime<Utc>>,
    is_special: bool,
    status: Option<ArticleStatus>,
    author_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: Option<String>) -> Self {
        self.slug = slug;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn categories(mut self, category_ids: Vec<i64>) -> Self {
        self.category_ids = category_ids;
        self
    }

    pub fn publish_at(mut self, publish_at: Option<DateTime<Utc>>) -> Self {
        self.publish_at = publish_at;
        self
    }

    pub fn special(mut self, is_special: bool) -> Self {
        self.is_special = is_special;
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn author(mut self, author_id: Option<i64>) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            body: self.body.ok_or("body is required")?,
            thumbnail: self.thumbnail.ok_or("thumbnail is required")?,
            category_ids: self.category_ids,
            publish_at: self.publish_at,
            is_special: self.is_special,
            status: self.status.unwrap_or(ArticleStatus::Draft),
            author_id: self.author_id,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_dashboard_access(actor)?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let thumbnail = Thumbnail::new(command.thumbnail)?;
        let now = self.clock.now();

        let slug = match command.slug.filter(|s| !s.trim().is_empty()) {
            Some(raw) => {
                let slug = ArticleSlug::new(raw)?;
                self.ensure_slug_available(&slug, None).await?;
                slug
            }
            None => {
                self.slug_service
                    .generate_unique_slug(&title, None, now)
                    .await?
            }
        };

        let category_ids = self.resolve_categories(command.category_ids).await?;
        let author_id = self.resolve_author(actor, command.author_id).await?;
        let status = ArticleStatus::resolve_submission(command.status, actor.is_superuser());

        let new_article = NewArticle {
            author_id: Some(author_id),
            title,
            slug,
            body,
            thumbnail,
            publish_at: command.publish_at.unwrap_or(now),
            is_special: command.is_special,
            status,
            category_ids,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = created.id.0,
            actor = %actor.username,
            status = %created.status,
            "article created"
        );
        article_dto(self.category_repo.as_ref(), created).await
    }
}
