// src/application/queries/articles/dashboard.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            ArticleFilter, ArticleOrdering, ArticleStatus,
            specifications::{ArticleSpecification, CanUseDashboardSpec},
        },
        pagination::PageRequest,
    },
};

#[derive(Debug, Default)]
pub struct DashboardQuery {
    pub status: Option<ArticleStatus>,
    pub q: Option<String>,
    pub page: Option<u32>,
}

impl ArticleQueryService {
    /// Superusers moderate every article; authors see only their own.
    pub async fn dashboard(
        &self,
        actor: &AuthenticatedUser,
        query: DashboardQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        if !CanUseDashboardSpec::new(&actor.capabilities).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only authors and superusers can use the dashboard",
            ));
        }

        let mut filter = ArticleFilter::default().with_status(query.status);
        if let Some(term) = query.q.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            filter = filter.with_search(term);
        }

        let ordering = if actor.is_superuser() {
            ArticleOrdering::Moderation
        } else {
            filter = filter.with_author(actor.id);
            ArticleOrdering::Newest
        };

        let request = PageRequest::new(
            query.page.unwrap_or(1),
            self.settings.dashboard_page_size,
        )?;
        self.page_of(&filter, ordering, request).await
    }
}
