// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::moderation::ModerationState;
use crate::domain::user::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    /// Joined from the users table for display; not part of the write model.
    pub author_username: Option<Username>,
    pub body: CommentBody,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn state(&self) -> ModerationState {
        if self.approved {
            ModerationState::Approved
        } else {
            ModerationState::Pending
        }
    }

    /// Pending to Approved. Returns false when already approved; nothing changes then.
    pub fn approve(&mut self, now: DateTime<Utc>) -> bool {
        if self.approved {
            return false;
        }
        self.approved = true;
        self.updated_at = now;
        true
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(
        article_id: ArticleId,
        author_id: UserId,
        body: CommentBody,
        approved: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            article_id,
            author_id,
            body,
            approved,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn pending_comment() -> Comment {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Comment {
            id: CommentId::new(1).unwrap(),
            article_id: ArticleId::new(1).unwrap(),
            author_id: UserId::new(2).unwrap(),
            author_username: None,
            body: CommentBody::new("hello").unwrap(),
            approved: false,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn approve_transitions_pending_once() {
        let mut comment = pending_comment();
        assert_eq!(comment.state(), ModerationState::Pending);

        let later = comment.created_at + Duration::minutes(3);
        assert!(comment.approve(later));
        assert_eq!(comment.state(), ModerationState::Approved);
        assert_eq!(comment.updated_at, later);

        assert!(!comment.approve(later + Duration::minutes(1)));
        assert!(comment.approved);
        assert_eq!(comment.updated_at, later);
    }
}
