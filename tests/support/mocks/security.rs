// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use quillpost::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use quillpost::domain::user::{Role, UserId};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const OTHER_AUTHOR_TOKEN: &str = "other-author-token";
pub const MEMBER_TOKEN: &str = "member-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub const ADMIN_ID: i64 = 1;
pub const AUTHOR_ID: i64 = 2;
pub const OTHER_AUTHOR_ID: i64 = 3;
pub const MEMBER_ID: i64 = 4;

/* -------------------------------- TokenManager -------------------------------- */

/// Maps fixed bearer strings onto the seeded accounts. Issued tokens are
/// `issued-<username>` and are not accepted back.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("issued-{}", subject.username),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(token_user(ADMIN_ID, "admin", Role::Admin)),
            AUTHOR_TOKEN => Ok(token_user(AUTHOR_ID, "alice", Role::Author)),
            OTHER_AUTHOR_TOKEN => Ok(token_user(OTHER_AUTHOR_ID, "bob", Role::Author)),
            MEMBER_TOKEN => Ok(token_user(MEMBER_ID, "mallory", Role::Member)),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

fn token_user(id: i64, username: &str, role: Role) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Reversible "hash" so tests can seed known credentials.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

pub fn hashed(password: &str) -> String {
    format!("hash::{password}")
}

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(hashed(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if hashed(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
