use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{article::ArticleReadRepository, comment::CommentReadRepository},
};

pub struct CommentQueryService {
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) recent_approved_limit: usize,
}

impl CommentQueryService {
    pub fn new(
        read_repo: Arc<dyn CommentReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
        recent_approved_limit: usize,
    ) -> Self {
        Self {
            read_repo,
            article_repo,
            clock,
            recent_approved_limit,
        }
    }
}
