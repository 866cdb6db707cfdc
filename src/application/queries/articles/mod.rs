// src/application/queries/articles/mod.rs
mod author;
mod category;
mod dashboard;
mod detail;
mod popular;
mod preview;
mod published;
mod search;
mod service;

pub use author::AuthorArticlesQuery;
pub use category::CategoryArticlesQuery;
pub use dashboard::DashboardQuery;
pub use detail::ArticleDetailQuery;
pub use popular::{DEFAULT_POPULAR_LIMIT, MAX_POPULAR_LIMIT, PopularArticlesQuery};
pub use preview::PreviewArticleQuery;
pub use published::ListPublishedQuery;
pub use search::SearchArticlesQuery;
pub use service::ArticleQueryService;
