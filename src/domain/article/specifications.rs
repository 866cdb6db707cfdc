use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Capability, UserId};

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

fn has_capability(capabilities: &HashSet<Capability>, resource: &str, action: &str) -> bool {
    capabilities.iter().any(|cap| cap.matches(resource, action))
}

/// Edit and preview access: moderators always, authors only on their own
/// article while it is a draft or has been returned to them.
pub struct CanEditArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanEditArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }
}

impl ArticleSpecification for CanEditArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "update:any")
            || (has_capability(self.capabilities, "articles", "update:own")
                && self.article.is_authored_by(self.user_id)
                && self.article.status.is_author_editable())
    }
}

pub struct CanDeleteArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub fn new(capabilities: &'a HashSet<Capability>) -> Self {
        Self { capabilities }
    }
}

impl ArticleSpecification for CanDeleteArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "delete:any")
    }
}

/// Access to the article dashboard (listing and creating one's articles).
pub struct CanUseDashboardSpec<'a> {
    capabilities: &'a HashSet<Capability>,
}

impl<'a> CanUseDashboardSpec<'a> {
    pub fn new(capabilities: &'a HashSet<Capability>) -> Self {
        Self { capabilities }
    }
}

impl ArticleSpecification for CanUseDashboardSpec<'_> {
    fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "create")
    }
}
