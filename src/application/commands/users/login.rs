// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, Landing, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
    pub landing: Landing,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self.authenticate(&username, &command.password).await?;

        let token = self.token_manager.issue(TokenSubject::for_user(&user)).await?;
        let landing = Landing::for_user(&user);
        tracing::info!(user_id = user.id.0, ?landing, "user signed in");

        Ok(LoginResult {
            token,
            user: user.into(),
            landing,
        })
    }

    async fn authenticate(&self, username: &Username, password: &str) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            tracing::warn!(user_id = user.id.0, "login attempt on disabled account");
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
