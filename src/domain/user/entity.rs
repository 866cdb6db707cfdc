// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Option<Email>,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }

    /// Superusers and authors land on the article dashboard after signing in.
    pub fn can_use_dashboard(&self) -> bool {
        self.role.is_superuser() || self.role.is_author()
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Option<Email>,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            username,
            email: None,
            first_name: String::new(),
            last_name: String::new(),
            password_hash,
            role,
            is_active: true,
            created_at,
        })
    }

    pub fn with_email(mut self, email: Option<Email>) -> Self {
        self.email = email;
        self
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub is_active: Option<bool>,
    pub role: Option<Role>,
    pub password_hash: Option<PasswordHash>,
    /// `Some(None)` clears the stored address.
    pub email: Option<Option<Email>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            is_active: None,
            role: None,
            password_hash: None,
            email: None,
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_email(mut self, email: Option<Email>) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.is_active.is_none()
            && self.role.is_none()
            && self.password_hash.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }
}
