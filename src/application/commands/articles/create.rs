// src/application/commands/articles/create.rs
use super::{ArticleCommandService, guard::ensure_can_create};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        article::{ArticleContent, ArticleSlug, ArticleStatus, ArticleTitle, NewArticle},
    },
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    /// Derived from the title when absent.
    pub slug: Option<String>,
    pub status: ArticleStatus,
    /// Defaults to the creation instant.
    pub published_at: Option<DateTime<Utc>>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    slug: Option<String>,
    status: ArticleStatus,
    published_at: Option<DateTime<Utc>>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            slug: self.slug,
            status: self.status,
            published_at: self.published_at,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &Actor,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let author_id = ensure_can_create(actor)?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let now = self.clock.now();

        let slug = match command.slug {
            Some(raw) => {
                let slug = ArticleSlug::new(raw)?;
                if !self.slug_service.ensure_available(&slug, None).await? {
                    return Err(ApplicationError::conflict(format!(
                        "slug '{slug}' is already in use"
                    )));
                }
                slug
            }
            None => {
                self.slug_service
                    .generate_unique_slug(&title, None, now)
                    .await?
            }
        };

        let new_article = NewArticle {
            title,
            slug,
            content,
            status: command.status,
            published_at: command.published_at.unwrap_or(now),
            author_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = %created.id,
            author_id = %author_id,
            status = %created.status,
            "article created"
        );
        Ok(created.into())
    }
}
