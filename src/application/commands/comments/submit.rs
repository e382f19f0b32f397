use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentSubmissionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        article::{Article, ArticleId, ArticleSlug},
        comment::{CommentBody, NewComment},
        moderation::{SubmissionOutcome, can_comment, initial_approval},
    },
};

/// How the target article is addressed.
#[derive(Debug, Clone)]
pub enum ArticleRef {
    Id(i64),
    Slug(String),
}

pub struct SubmitCommentCommand {
    pub article: ArticleRef,
    pub content: String,
}

impl CommentCommandService {
    /// Stores a comment against an existing article. Superusers are published
    /// immediately; everyone else lands in the moderation queue.
    pub async fn submit_comment(
        &self,
        actor: &Actor,
        command: SubmitCommentCommand,
    ) -> ApplicationResult<CommentSubmissionDto> {
        let author_id = match actor.user_id() {
            Some(id) if can_comment(actor) => id,
            _ => return Err(ApplicationError::unauthorized("authentication required")),
        };

        let body = CommentBody::with_limit(command.content, self.max_length)?;
        let article = self.resolve_article(&command.article).await?;

        let approved = initial_approval(actor);
        let new_comment =
            NewComment::new(article.id, author_id, body, approved, self.clock.now());
        let comment = self.write_repo.insert(new_comment).await?;

        let outcome = SubmissionOutcome::for_approval(comment.approved);
        tracing::info!(
            comment_id = %comment.id,
            article_id = %article.id,
            outcome = ?outcome,
            "comment submitted"
        );
        Ok(CommentSubmissionDto::new(comment, outcome))
    }

    // Existence only: drafts and scheduled articles accept comments too.
    async fn resolve_article(&self, reference: &ArticleRef) -> ApplicationResult<Article> {
        let found = match reference {
            ArticleRef::Id(raw) => {
                let id = ArticleId::new(*raw)
                    .map_err(|_| ApplicationError::article_not_found())?;
                self.article_repo.find_by_id(id).await?
            }
            ArticleRef::Slug(raw) => {
                let slug = ArticleSlug::new(raw.clone())
                    .map_err(|_| ApplicationError::article_not_found())?;
                self.article_repo.find_by_slug(&slug).await?
            }
        };
        found.ok_or_else(ApplicationError::article_not_found)
    }
}
