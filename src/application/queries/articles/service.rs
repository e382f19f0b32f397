use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{article::ArticleReadRepository, comment::CommentReadRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) page_size: u32,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentReadRepository>,
        clock: Arc<dyn Clock>,
        page_size: u32,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            clock,
            page_size,
        }
    }
}
