// src/application/commands/articles/mod.rs
mod capability;
mod create;
mod delete;
mod moderate;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use moderate::BulkSetStatusCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
