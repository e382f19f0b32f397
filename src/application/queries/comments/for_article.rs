use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        article::ArticleSlug,
        visibility::{can_view_article, visible_comments},
    },
};

impl CommentQueryService {
    /// Approved comments of an article the actor can see, newest first.
    pub async fn list_for_article(
        &self,
        actor: &Actor,
        slug: &str,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let not_found = ApplicationError::article_not_found;
        let slug = ArticleSlug::new(slug).map_err(|_| not_found())?;
        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .filter(|article| can_view_article(actor, article, self.clock.now()))
            .ok_or_else(not_found)?;

        let comments = self.read_repo.list_for_article(article.id, true).await?;
        Ok(visible_comments(comments)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
