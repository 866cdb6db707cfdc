// src/application/commands/users/register.rs
use super::{UserCommandService, capability::ensure_capability, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// The very first account bootstraps the site as its administrator.
    /// After that only actors holding `users:create` may register people.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;
        let email = command
            .email
            .filter(|e| !e.trim().is_empty())
            .map(Email::new)
            .transpose()?;

        let first_name = command.first_name.unwrap_or_default();
        let last_name = command.last_name.unwrap_or_default();

        // Bootstrap only while no account exists. The insert re-checks
        // emptiness atomically, so a concurrent registration that got there
        // first sends this one down the gated path.
        if self.user_repo.count().await? == 0 {
            let mut founder = self
                .prepare_user(username.clone(), &command.password, Role::Admin)
                .await?
                .with_email(email.clone());
            founder.first_name = first_name.clone();
            founder.last_name = last_name.clone();

            if let Some(user) = self.user_repo.insert_if_empty(founder).await? {
                tracing::info!(user_id = user.id.0, "administrator account bootstrapped");
                return Ok(user.into());
            }
        }

        let role = Self::determine_role(actor, command.role)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let mut new_user = self
            .prepare_user(username, &command.password, role)
            .await?
            .with_email(email);
        new_user.first_name = first_name;
        new_user.last_name = last_name;

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = user.id.0, role = %user.role.as_str(), "user registered");
        Ok(user.into())
    }

    fn determine_role(
        actor: Option<&AuthenticatedUser>,
        role: Option<Role>,
    ) -> ApplicationResult<Role> {
        let requester = actor
            .ok_or_else(|| ApplicationError::forbidden("administrative privileges are required"))?;
        ensure_capability(requester, "users", "create")?;
        Ok(role.unwrap_or_default())
    }

    async fn prepare_user(
        &self,
        username: Username,
        password: &str,
        role: Role,
    ) -> ApplicationResult<NewUser> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        Ok(NewUser::new(username, password_hash, role, self.clock.now())?)
    }
}
