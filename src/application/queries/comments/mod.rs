mod admin;
mod for_article;
mod queue;
mod service;

pub use admin::ListCommentsQuery;
pub use service::CommentQueryService;
