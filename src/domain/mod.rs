pub mod article;
pub mod category;
pub mod errors;
pub mod hit;
pub mod pagination;
pub mod user;
