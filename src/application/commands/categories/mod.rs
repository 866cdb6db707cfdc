// src/application/commands/categories/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateCategoryCommand;
pub use delete::DeleteCategoryCommand;
pub use service::CategoryCommandService;
pub use update::UpdateCategoryCommand;
