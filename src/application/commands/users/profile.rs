// src/application/commands/users/profile.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, UserUpdate},
};

/// Self-service profile edit. `email: Some("")` clears the address.
#[derive(Default)]
pub struct UpdateProfileCommand {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::new(actor.id);
        if let Some(raw) = command.email {
            let email = if raw.trim().is_empty() {
                None
            } else {
                Some(Email::new(raw)?)
            };
            update = update.with_email(email);
        }
        if let Some(first_name) = command.first_name {
            update = update.with_first_name(first_name.trim());
        }
        if let Some(last_name) = command.last_name {
            update = update.with_last_name(last_name.trim());
        }
        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}
