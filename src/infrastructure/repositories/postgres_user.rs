// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, Role, User, UserId, UserRepository, UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str =
    "id, username, email, first_name, last_name, password_hash, role, is_active, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: UserUpdate) -> QueryBuilder<'static, Postgres> {
        let UserUpdate {
            id,
            is_active,
            role,
            password_hash,
            email,
            first_name,
            last_name,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(is_active) = is_active {
                set.push("is_active = ");
                set.push_bind_unseparated(is_active);
            }
            if let Some(role) = role {
                set.push("role = ");
                set.push_bind_unseparated(role.as_str());
            }
            if let Some(password_hash) = password_hash {
                set.push("password_hash = ");
                set.push_bind_unseparated(password_hash.as_str().to_string());
            }
            if let Some(email) = email {
                set.push("email = ");
                set.push_bind_unseparated(email.map(String::from));
            }
            if let Some(first_name) = first_name {
                set.push("first_name = ");
                set.push_bind_unseparated(first_name);
            }
            if let Some(last_name) = last_name {
                set.push("last_name = ");
                set.push_bind_unseparated(last_name);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {USER_COLUMNS}"));
        builder
    }
}

/// Advisory lock key guarding first-account registration.
const BOOTSTRAP_LOCK_KEY: i64 = 0x7175_696c_6c00_0001;

type UserQuery<'q> = sqlx::query::QueryAs<'q, Postgres, UserRow, sqlx::postgres::PgArguments>;

fn bind_new_user(query: UserQuery<'_>, new_user: NewUser) -> UserQuery<'_> {
    let NewUser {
        username,
        email,
        first_name,
        last_name,
        password_hash,
        role,
        is_active,
        created_at,
    } = new_user;

    query
        .bind(String::from(username))
        .bind(email.map(String::from))
        .bind(first_name)
        .bind(last_name)
        .bind(String::from(password_hash))
        .bind(role.as_str())
        .bind(is_active)
        .bind(created_at)
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: Option<String>,
    first_name: String,
    last_name: String,
    password_hash: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: row.email.map(Email::new).transpose()?,
            first_name: row.first_name,
            last_name: row.last_name,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let row = bind_new_user(
            sqlx::query_as::<_, UserRow>(&format!(
                "INSERT INTO users
                    (username, email, first_name, last_name, password_hash, role, is_active, created_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                 RETURNING {USER_COLUMNS}"
            )),
            new_user,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn insert_if_empty(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Serialises concurrent bootstrap attempts; released on commit.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(BOOTSTRAP_LOCK_KEY)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let row = bind_new_user(
            sqlx::query_as::<_, UserRow>(&format!(
                "INSERT INTO users
                    (username, email, first_name, last_name, password_hash, role, is_active, created_at)
                 SELECT $1, $2, $3, $4, $5, $6, $7, $8
                 WHERE NOT EXISTS (SELECT 1 FROM users)
                 RETURNING {USER_COLUMNS}"
            )),
            new_user,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let mut builder = Self::build_update_query(update);
        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}
