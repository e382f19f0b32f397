use super::CommentQueryService;
use crate::{
    application::{
        dto::ModerationQueueDto,
        error::ApplicationResult,
        guards::ensure_can_moderate,
    },
    domain::{actor::Actor, moderation::ModerationQueue},
};

impl CommentQueryService {
    /// All pending comments plus the newest approved ones.
    pub async fn moderation_queue(&self, actor: &Actor) -> ApplicationResult<ModerationQueueDto> {
        ensure_can_moderate(actor)?;

        let limit = u32::try_from(self.recent_approved_limit).unwrap_or(u32::MAX);
        let pending = self.read_repo.list_by_approval(false, None).await?;
        let approved = self.read_repo.list_by_approval(true, Some(limit)).await?;

        let queue = ModerationQueue::assemble(pending, approved, self.recent_approved_limit);
        Ok(queue.into())
    }
}
