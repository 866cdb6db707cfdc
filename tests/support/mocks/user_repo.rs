// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use quillpost::domain::errors::{DomainError, DomainResult};
use quillpost::domain::user::{NewUser, User, UserId, UserRepository, UserUpdate, Username};

/// In-memory user table with a unique username index.
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<BTreeMap<i64, User>>,
}

impl InMemoryUserRepo {
    pub fn put(&self, user: User) {
        self.users.lock().unwrap().insert(user.id.0, user);
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

fn store(users: &mut BTreeMap<i64, User>, new_user: NewUser) -> DomainResult<User> {
    if users.values().any(|u| u.username == new_user.username) {
        return Err(DomainError::Conflict("username already taken".into()));
    }
    let id = users.keys().next_back().copied().unwrap_or(0) + 1;
    let user = User {
        id: UserId::new(id)?,
        username: new_user.username,
        email: new_user.email,
        first_name: new_user.first_name,
        last_name: new_user.last_name,
        password_hash: new_user.password_hash,
        role: new_user.role,
        is_active: new_user.is_active,
        created_at: new_user.created_at,
    };
    users.insert(id, user.clone());
    Ok(user)
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        store(&mut self.users.lock().unwrap(), new_user)
    }

    async fn insert_if_empty(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        if !users.is_empty() {
            return Ok(None);
        }
        store(&mut users, new_user).map(Some)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| &u.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id.0).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        Ok(user.clone())
    }
}
