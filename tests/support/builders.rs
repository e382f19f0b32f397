// tests/support/builders.rs
use blog_core::domain::article::*;
use blog_core::domain::comment::{CommentBody, NewComment};
use blog_core::domain::user::UserId;
use chrono::{DateTime, Utc};

use super::helpers::fixed_now;

pub struct ArticleBuilder {
    title: String,
    slug: Option<String>,
    content: String,
    status: ArticleStatus,
    published_at: DateTime<Utc>,
    author_id: i64,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            slug: None,
            content: "Test content".into(),
            status: ArticleStatus::Published,
            published_at: fixed_now() - chrono::Duration::days(1),
            author_id: 1,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = ArticleStatus::Draft;
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = at;
        self
    }

    pub fn author(mut self, id: UserId) -> Self {
        self.author_id = id.0;
        self
    }

    pub fn build(self) -> NewArticle {
        let slug = self
            .slug
            .unwrap_or_else(|| self.title.to_lowercase().replace(' ', "-"));
        NewArticle {
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            status: self.status,
            published_at: self.published_at,
            author_id: UserId::new(self.author_id).unwrap(),
            created_at: self.published_at,
            updated_at: self.published_at,
        }
    }
}

pub fn new_comment(
    article_id: ArticleId,
    author_id: UserId,
    content: &str,
    approved: bool,
    at: DateTime<Utc>,
) -> NewComment {
    NewComment::new(
        article_id,
        author_id,
        CommentBody::new(content).unwrap(),
        approved,
        at,
    )
}
