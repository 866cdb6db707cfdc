pub mod repository;
pub mod value_objects;

pub use repository::ArticleHitRepository;
pub use value_objects::ClientAddress;
