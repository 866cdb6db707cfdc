// src/application/services/mod.rs
mod article_views;

pub use article_views::{article_dto, article_dtos, category_map};

use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        category::CategoryRepository,
        hit::ArticleHitRepository,
        user::UserRepository,
    },
};

/// Tunables for the public blog and the dashboard listings.
#[derive(Debug, Clone)]
pub struct BlogSettings {
    pub page_size: u32,
    pub dashboard_page_size: u32,
    pub popular_window: Duration,
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            page_size: 5,
            dashboard_page_size: 20,
            popular_window: Duration::days(30),
        }
    }
}

/// Repositories handed to [`ApplicationServices::new`].
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub hits: Arc<dyn ArticleHitRepository>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        settings: BlogSettings,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            token_manager,
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.users),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.users),
            Arc::clone(&repos.hits),
            Arc::clone(&clock),
            settings,
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&slugger),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&repos.categories)));

        Self {
            user_commands,
            user_queries,
            article_commands,
            article_queries,
            category_commands,
            category_queries,
        }
    }
}
