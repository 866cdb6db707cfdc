pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{
    ArticleFilter, ArticleOrdering, ArticleReadRepository, ArticleWriteRepository,
    PopularArticle,
};
pub use value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, Thumbnail,
};
