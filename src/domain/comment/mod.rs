pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, NewComment};
pub use repository::{CommentFilter, CommentReadRepository, CommentWriteRepository};
pub use value_objects::{CommentBody, CommentId, DEFAULT_COMMENT_MAX_LEN};
