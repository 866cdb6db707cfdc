// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod category_repo;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

pub use time::fixed_now;

pub use security::{
    ADMIN_ID, ADMIN_TOKEN, AUTHOR_ID, AUTHOR_TOKEN, DummyTokenManager, EXPIRED_TOKEN, MEMBER_ID,
    MEMBER_TOKEN, OTHER_AUTHOR_ID, OTHER_AUTHOR_TOKEN, StrictPasswordHasher, hashed,
};

pub use util::{DummyClock, DummySlug};

pub use user_repo::InMemoryUserRepo;

pub use category_repo::InMemoryCategoryRepo;

pub use article_repos::{InMemoryArticleRepo, InMemoryHitRepo};
