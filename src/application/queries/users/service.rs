// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{security::TokenManager, time::Clock},
    domain::user::UserRepository,
};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            token_manager,
            clock,
        }
    }
}
