// src/domain/moderation.rs
use crate::domain::actor::Actor;
use crate::domain::comment::Comment;
use crate::domain::specification::Specification;
use crate::domain::visibility::comment_order;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_RECENT_APPROVED: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationState {
    Pending,
    Approved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Delete,
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Approve => "approve",
            Self::Delete => "delete",
        })
    }
}

/// What a submitter is told after posting a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Published,
    PendingModeration,
}

impl SubmissionOutcome {
    pub fn for_approval(approved: bool) -> Self {
        if approved {
            Self::Published
        } else {
            Self::PendingModeration
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Published => "Your comment has been published.",
            Self::PendingModeration => "Your comment is awaiting moderation.",
        }
    }
}

pub struct CanModerateSpec<'a> {
    actor: &'a Actor,
}

impl<'a> CanModerateSpec<'a> {
    pub fn new(actor: &'a Actor) -> Self {
        Self { actor }
    }
}

impl Specification for CanModerateSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.actor.is_authenticated() && self.actor.is_superuser()
    }
}

pub fn can_moderate(actor: &Actor) -> bool {
    CanModerateSpec::new(actor).is_satisfied()
}

pub fn can_comment(actor: &Actor) -> bool {
    actor.is_authenticated()
}

/// Superusers skip the queue.
pub fn initial_approval(actor: &Actor) -> bool {
    actor.is_superuser()
}

#[derive(Debug, Clone, Default)]
pub struct ModerationQueue {
    pub pending: Vec<Comment>,
    pub recently_approved: Vec<Comment>,
}

impl ModerationQueue {
    /// Every pending comment plus the `recent_limit` newest approved ones,
    /// both newest first. Inputs may arrive in any order or mixed state.
    pub fn assemble<P, A>(pending: P, approved: A, recent_limit: usize) -> Self
    where
        P: IntoIterator<Item = Comment>,
        A: IntoIterator<Item = Comment>,
    {
        let mut pending: Vec<Comment> = pending.into_iter().filter(|c| !c.approved).collect();
        pending.sort_by(comment_order);

        let mut recently_approved: Vec<Comment> =
            approved.into_iter().filter(|c| c.approved).collect();
        recently_approved.sort_by(comment_order);
        recently_approved.truncate(recent_limit);

        Self {
            pending,
            recently_approved,
        }
    }
}
