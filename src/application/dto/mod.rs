pub mod articles;
pub mod auth;
pub mod comments;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDetailDto, ArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::{BulkApproveResultDto, CommentDto, CommentSubmissionDto, ModerationQueueDto};
pub use pagination::CursorPage;
pub use users::{UserDto, UserProfileDto};
