use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailDto, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        article::{Article, ArticleSlug},
        visibility::{can_view_article, visible_comments},
    },
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Resolves an article the actor may read. Hidden articles are reported
    /// as missing.
    pub async fn find_visible_article(
        &self,
        actor: &Actor,
        slug: &str,
    ) -> ApplicationResult<Article> {
        let not_found = ApplicationError::article_not_found;
        let slug = ArticleSlug::new(slug).map_err(|_| not_found())?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        if !can_view_article(actor, &article, self.clock.now()) {
            return Err(not_found());
        }
        Ok(article)
    }

    pub async fn get_article_by_slug(
        &self,
        actor: &Actor,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let article = self.find_visible_article(actor, &query.slug).await?;

        let comments = self.comment_repo.list_for_article(article.id, true).await?;
        let comments: Vec<CommentDto> = visible_comments(comments)
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ArticleDetailDto {
            article: article.into(),
            comments,
        })
    }
}
