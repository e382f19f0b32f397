// src/application/guards.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{actor::Actor, moderation::can_moderate},
};

/// 401 for anonymous actors, 403 for authenticated non-superusers.
pub(crate) fn ensure_can_moderate(actor: &Actor) -> ApplicationResult<()> {
    if !actor.is_authenticated() {
        return Err(ApplicationError::unauthorized("authentication required"));
    }
    if can_moderate(actor) {
        Ok(())
    } else {
        tracing::debug!(actor = ?actor, "moderation refused");
        Err(ApplicationError::forbidden("moderation requires a superuser"))
    }
}
