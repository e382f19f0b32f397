// src/application/commands/comments/mod.rs
mod moderate;
mod service;
mod submit;

pub use moderate::{BulkApproveCommand, ModerateCommentCommand};
pub use service::CommentCommandService;
pub use submit::{ArticleRef, SubmitCommentCommand};
