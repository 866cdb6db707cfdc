// src/application/queries/users/mod.rs
mod authenticate;
mod profile;
mod service;

pub use service::UserQueryService;
