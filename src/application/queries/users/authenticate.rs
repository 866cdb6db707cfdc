// src/application/queries/users/authenticate.rs
use super::UserQueryService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// Verify a bearer token and resolve the caller against the stored
    /// account. Role and capabilities always come from the store, so a
    /// demotion or deactivation applies to tokens already issued.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let claimed = self.token_manager.authenticate(token).await?;

        let user = self
            .user_repo
            .find_by_id(claimed.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;

        if !user.is_active {
            tracing::info!(user_id = i64::from(user.id), "rejected token of inactive account");
            return Err(ApplicationError::unauthorized("account is disabled"));
        }

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
            issued_at: claimed.issued_at,
            expires_at: claimed.expires_at,
        })
    }
}
