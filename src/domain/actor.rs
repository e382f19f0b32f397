// src/domain/actor.rs
use crate::domain::user::UserId;

/// The identity on whose behalf an operation runs.
///
/// Every visibility and moderation decision receives the actor explicitly;
/// nothing in the domain reads ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Actor {
    #[default]
    Anonymous,
    Member(UserId),
    Superuser(UserId),
}

impl Actor {
    pub fn authenticated(id: UserId, is_superuser: bool) -> Self {
        if is_superuser {
            Self::Superuser(id)
        } else {
            Self::Member(id)
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    pub fn is_superuser(&self) -> bool {
        matches!(self, Self::Superuser(_))
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::Member(id) | Self::Superuser(id) => Some(*id),
        }
    }

    /// True when the actor is the given user.
    pub fn is(&self, user: UserId) -> bool {
        self.user_id() == Some(user)
    }
}
