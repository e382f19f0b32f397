// src/application/commands/articles/delete.rs
use super::{
    ArticleCommandService,
    guard::{ensure_authenticated, ensure_can_mutate},
};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{actor::Actor, article::ArticleId},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Removes the article; its comments go with it.
    pub async fn delete_article(
        &self,
        actor: &Actor,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        ensure_authenticated(actor)?;
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::article_not_found)?;

        ensure_can_mutate(actor, &article)?;

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
