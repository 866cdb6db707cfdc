// src/application/commands/articles/capability.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::specifications::{ArticleSpecification, CanUseDashboardSpec},
};

pub(super) fn ensure_capability(
    actor: &AuthenticatedUser,
    resource: &str,
    action: &str,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability {resource}:{action}"
        )))
    }
}

pub(super) fn ensure_dashboard_access(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if CanUseDashboardSpec::new(&actor.capabilities).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "only authors and superusers can manage articles",
        ))
    }
}
