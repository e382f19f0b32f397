use super::CommentCommandService;
use crate::{
    application::{
        dto::{BulkApproveResultDto, CommentDto},
        error::{ApplicationError, ApplicationResult},
        guards::ensure_can_moderate,
    },
    domain::{actor::Actor, comment::CommentId, moderation::ModerationAction},
};

pub struct ModerateCommentCommand {
    pub id: i64,
    pub action: ModerationAction,
}

pub struct BulkApproveCommand {
    pub ids: Vec<i64>,
}

impl CommentCommandService {
    /// Applies a moderation action. Returns the comment after approval, or
    /// `None` once deleted.
    pub async fn moderate(
        &self,
        actor: &Actor,
        command: ModerateCommentCommand,
    ) -> ApplicationResult<Option<CommentDto>> {
        ensure_can_moderate(actor)?;
        let id = CommentId::new(command.id)
            .map_err(|_| ApplicationError::comment_not_found())?;

        let mut comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::comment_not_found)?;

        match command.action {
            ModerationAction::Approve => {
                if !comment.approve(self.clock.now()) {
                    return Ok(Some(comment.into()));
                }
                let approved = self.write_repo.approve(id, comment.updated_at).await?;
                tracing::info!(comment_id = %id, "comment approved");
                Ok(Some(approved.into()))
            }
            ModerationAction::Delete => {
                self.write_repo.delete(id).await?;
                tracing::info!(comment_id = %id, "comment deleted");
                Ok(None)
            }
        }
    }

    pub async fn approve_comment(&self, actor: &Actor, id: i64) -> ApplicationResult<CommentDto> {
        let command = ModerateCommentCommand {
            id,
            action: ModerationAction::Approve,
        };
        self.moderate(actor, command)
            .await?
            .ok_or_else(ApplicationError::comment_not_found)
    }

    pub async fn delete_comment(&self, actor: &Actor, id: i64) -> ApplicationResult<()> {
        let command = ModerateCommentCommand {
            id,
            action: ModerationAction::Delete,
        };
        self.moderate(actor, command).await.map(|_| ())
    }

    /// Approves every listed comment that exists; unknown ids are skipped.
    pub async fn bulk_approve(
        &self,
        actor: &Actor,
        command: BulkApproveCommand,
    ) -> ApplicationResult<BulkApproveResultDto> {
        ensure_can_moderate(actor)?;

        let mut ids: Vec<CommentId> = command
            .ids
            .into_iter()
            .filter_map(|raw| CommentId::new(raw).ok())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(BulkApproveResultDto { approved: 0 });
        }

        let approved = self.write_repo.approve_many(&ids, self.clock.now()).await?;
        tracing::info!(requested = ids.len(), approved, "comments bulk approved");
        Ok(BulkApproveResultDto { approved })
    }
}
