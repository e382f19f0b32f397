use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::cursor::PageCursor;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Admin listing criteria.
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    pub approved: Option<bool>,
    /// Matched against the comment body and the author's username.
    pub search: Option<String>,
}

impl CommentFilter {
    pub fn matches(&self, comment: &Comment) -> bool {
        if self.approved.is_some_and(|approved| comment.approved != approved) {
            return false;
        }
        match self.search.as_deref() {
            Some(term) => {
                let term = term.to_lowercase();
                comment.body.as_str().to_lowercase().contains(&term)
                    || comment
                        .author_username
                        .as_ref()
                        .is_some_and(|name| name.as_str().to_lowercase().contains(&term))
            }
            None => true,
        }
    }
}

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Persists `approved = true`. `NotFound` when the id is unknown.
    async fn approve(&self, id: CommentId, updated_at: DateTime<Utc>) -> DomainResult<Comment>;
    /// Approves every listed comment that exists; returns how many rows matched.
    async fn approve_many(&self, ids: &[CommentId], updated_at: DateTime<Utc>)
    -> DomainResult<u64>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// All comments of an article, newest first; approved only when asked.
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>>;
    /// Comments in the given approval state, newest first, capped by `limit`.
    async fn list_by_approval(
        &self,
        approved: bool,
        limit: Option<u32>,
    ) -> DomainResult<Vec<Comment>>;
    async fn search(
        &self,
        filter: &CommentFilter,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Comment>, Option<PageCursor>)>;
}
