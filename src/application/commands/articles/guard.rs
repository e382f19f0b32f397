// src/application/commands/articles/guard.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        actor::Actor,
        article::{
            Article,
            specifications::{can_create, can_mutate},
        },
        user::UserId,
    },
};

pub(super) fn ensure_authenticated(actor: &Actor) -> ApplicationResult<UserId> {
    actor
        .user_id()
        .ok_or_else(|| ApplicationError::unauthorized("authentication required"))
}

/// Returns the author id the new article will carry.
pub(super) fn ensure_can_create(actor: &Actor) -> ApplicationResult<UserId> {
    let author_id = ensure_authenticated(actor)?;
    if can_create(actor) {
        Ok(author_id)
    } else {
        Err(ApplicationError::forbidden("not allowed to create articles"))
    }
}

pub(super) fn ensure_can_mutate(actor: &Actor, article: &Article) -> ApplicationResult<()> {
    if can_mutate(actor, article) {
        Ok(())
    } else {
        tracing::debug!(
            article_id = %article.id,
            actor = ?actor,
            "article mutation refused"
        );
        Err(ApplicationError::forbidden(
            "only the author or a superuser may modify this article",
        ))
    }
}
