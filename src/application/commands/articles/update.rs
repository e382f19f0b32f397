use super::{
    ArticleCommandService,
    guard::{ensure_authenticated, ensure_can_mutate},
};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        article::{
            Article, ArticleContent, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
            ArticleUpdate,
        },
    },
};
use chrono::{DateTime, Utc};

/// Partial update; `None` leaves the field untouched. The slug only changes
/// when one is supplied explicitly.
#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub status: Option<ArticleStatus>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &Actor,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_authenticated(actor)?;
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::article_not_found)?;

        ensure_can_mutate(actor, &article)?;

        let UpdateArticleCommand {
            id: _,
            title,
            slug,
            content,
            status,
            published_at,
        } = command;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, now);

        let title_opt = title.map(ArticleTitle::new).transpose()?;
        let content_opt = content.map(ArticleContent::new).transpose()?;
        update = apply_content_updates(&mut article, title_opt, content_opt, update, now);

        if let Some(raw) = slug {
            update = self.apply_slug_update(&mut article, raw, update, now).await?;
        }

        if status.is_some() || published_at.is_some() {
            let status = status.unwrap_or(article.status);
            let published_at = published_at.unwrap_or(article.published_at);
            article.schedule(status, published_at, now);
            update = update.with_schedule(status, published_at);
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, status = %updated.status, "article updated");
        Ok(updated.into())
    }

    async fn apply_slug_update(
        &self,
        article: &mut Article,
        raw: String,
        update: ArticleUpdate,
        now: DateTime<Utc>,
    ) -> ApplicationResult<ArticleUpdate> {
        let slug = ArticleSlug::new(raw)?;
        if slug == article.slug {
            return Ok(update);
        }
        if !self
            .slug_service
            .ensure_available(&slug, Some(article.id))
            .await?
        {
            return Err(ApplicationError::conflict(format!(
                "slug '{slug}' is already in use"
            )));
        }
        article.set_slug(slug.clone(), now);
        Ok(update.with_slug(slug))
    }
}

fn apply_content_updates(
    article: &mut Article,
    title_opt: Option<ArticleTitle>,
    content_opt: Option<ArticleContent>,
    mut update: ArticleUpdate,
    now: DateTime<Utc>,
) -> ArticleUpdate {
    if title_opt.is_none() && content_opt.is_none() {
        return update;
    }

    let new_title = title_opt.clone().unwrap_or_else(|| article.title.clone());
    let new_content = content_opt.clone().unwrap_or_else(|| article.content.clone());
    article.set_content(new_title, new_content, now);

    if let Some(title) = title_opt {
        update = update.with_title(title);
    }
    if let Some(content) = content_opt {
        update = update.with_content(content);
    }
    update
}
