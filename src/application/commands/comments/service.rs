use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::ArticleReadRepository,
        comment::{CommentReadRepository, CommentWriteRepository},
    },
};

pub struct CommentCommandService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) max_length: usize,
}

impl CommentCommandService {
    pub fn new(
        write_repo: Arc<dyn CommentWriteRepository>,
        read_repo: Arc<dyn CommentReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
        max_length: usize,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            article_repo,
            clock,
            max_length,
        }
    }
}
