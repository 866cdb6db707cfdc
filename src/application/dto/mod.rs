pub mod articles;
pub mod auth;
pub mod categories;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDetailDto, ArticleDto, BulkStatusResultDto, PopularArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, Landing, TokenSubject};
pub use categories::{CategoryDto, CategorySummaryDto};
pub use pagination::Page;
pub use users::{CapabilityView, UserDto, UserProfileDto};
