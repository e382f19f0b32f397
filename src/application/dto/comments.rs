use crate::domain::comment::Comment;
use crate::domain::moderation::{ModerationQueue, SubmissionOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    pub content: String,
    pub approved: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author_id: comment.author_id.into(),
            author_username: comment.author_username.map(String::from),
            content: comment.body.into_inner(),
            approved: comment.approved,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Result of submitting a comment: the stored comment plus the user-facing signal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentSubmissionDto {
    pub comment: CommentDto,
    #[schema(value_type = String, example = "pending_moderation")]
    pub outcome: SubmissionOutcome,
    pub message: String,
}

impl CommentSubmissionDto {
    pub fn new(comment: Comment, outcome: SubmissionOutcome) -> Self {
        Self {
            comment: comment.into(),
            outcome,
            message: outcome.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModerationQueueDto {
    pub pending: Vec<CommentDto>,
    pub recently_approved: Vec<CommentDto>,
}

impl From<ModerationQueue> for ModerationQueueDto {
    fn from(queue: ModerationQueue) -> Self {
        Self {
            pending: queue.pending.into_iter().map(Into::into).collect(),
            recently_approved: queue
                .recently_approved
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkApproveResultDto {
    pub approved: u64,
}
