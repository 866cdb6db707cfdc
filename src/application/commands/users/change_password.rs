// src/application/commands/users/change_password.rs
use super::{UserCommandService, capability::ensure_capability, password::validate_password};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PasswordHash, User, UserId, UserUpdate},
};

pub struct ChangePasswordCommand {
    pub user_id: i64,
    pub current_password: Option<String>,
    pub new_password: String,
}

impl UserCommandService {
    /// Users change their own password by proving the current one; changing
    /// somebody else's needs `users:update`.
    pub async fn change_password(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let target_id = UserId::new(command.user_id)?;
        if actor.id != target_id {
            ensure_capability(actor, "users", "update")?;
        }

        let user = self
            .user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if actor.id == target_id {
            self.verify_current_password(&user, command.current_password.as_deref())
                .await?;
        }

        validate_password(&command.new_password)?;
        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let update = UserUpdate::new(target_id).with_password_hash(PasswordHash::new(hashed)?);
        self.user_repo.update(update).await?;

        tracing::info!(user_id = target_id.0, actor = %actor.username, "password changed");
        Ok(())
    }

    async fn verify_current_password(
        &self,
        user: &User,
        current_password: Option<&str>,
    ) -> ApplicationResult<()> {
        let current = current_password
            .ok_or_else(|| ApplicationError::validation("current password is required"))?;
        self.password_hasher
            .verify(current, user.password_hash.as_str())
            .await
    }
}
