// src/application/commands/articles/update.rs
use chrono::{DateTime, Utc};

use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        services::article_dto,
    },
    domain::article::{
        Article, ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate,
        Thumbnail,
        specifications::{ArticleSpecification, CanEditArticleSpec},
    },
};

#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub thumbnail: Option<String>,
    pub category_ids: Option<Vec<i64>>,
    pub publish_at: Option<DateTime<Utc>>,
    pub is_special: Option<bool>,
    pub status: Option<ArticleStatus>,
    pub author_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        // Refusals look exactly like a missing article.
        if !CanEditArticleSpec::new(&actor.capabilities, &article, actor.id).is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let mut update = ArticleUpdate::new(id, article.updated_at);
        update = self.apply_content(&article, &command, update).await?;

        if let Some(raw_ids) = command.category_ids {
            update = update.with_categories(self.resolve_categories(raw_ids).await?);
        }
        if let Some(publish_at) = command.publish_at {
            update = update.with_publish_at(publish_at);
        }
        if let Some(is_special) = command.is_special {
            update = update.with_is_special(is_special);
        }

        let superuser = actor.is_superuser();
        let status = match command.status {
            Some(requested) => ArticleStatus::resolve_submission(requested, superuser),
            None if superuser => article.status,
            None => ArticleStatus::resolve_submission(article.status, false),
        };
        if status != article.status {
            update = update.with_status(status);
        }

        if command.author_id.is_some() || !superuser {
            let author_id = self.resolve_author(actor, command.author_id).await?;
            if article.author_id != Some(author_id) {
                update = update.with_author(Some(author_id));
            }
        }

        update.set_updated_at(self.clock.now());
        let updated = self.write_repo.update(update).await?;
        if updated.status != article.status {
            tracing::info!(
                article_id = updated.id.0,
                actor = %actor.username,
                from = %article.status,
                to = %updated.status,
                "article status changed"
            );
        }
        article_dto(self.category_repo.as_ref(), updated).await
    }

    async fn apply_content(
        &self,
        article: &Article,
        command: &UpdateArticleCommand,
        mut update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        if let Some(title) = &command.title {
            update = update.with_title(ArticleTitle::new(title.clone())?);
        }
        if let Some(body) = &command.body {
            update = update.with_body(ArticleBody::new(body.clone())?);
        }
        if let Some(thumbnail) = &command.thumbnail {
            update = update.with_thumbnail(Thumbnail::new(thumbnail.clone())?);
        }
        if let Some(raw) = command.slug.as_ref().filter(|s| !s.trim().is_empty()) {
            let slug = ArticleSlug::new(raw.clone())?;
            if slug != article.slug {
                self.ensure_slug_available(&slug, Some(article.id)).await?;
                update = update.with_slug(slug);
            }
        }
        Ok(update)
    }
}
