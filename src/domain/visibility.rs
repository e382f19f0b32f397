// src/domain/visibility.rs
//! Read-side rules: which articles and comments an actor may see.
//!
//! All functions are pure. The caller supplies the current instant on every
//! request so scheduled articles surface as soon as their time passes.

use crate::domain::actor::Actor;
use crate::domain::article::Article;
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// The slice of the article table an actor is allowed to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleVisibility {
    All,
    PublishedAsOf(DateTime<Utc>),
}

impl ArticleVisibility {
    pub fn admits(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::PublishedAsOf(now) => article.is_live_at(*now),
        }
    }
}

pub fn article_scope(actor: &Actor, now: DateTime<Utc>) -> ArticleVisibility {
    if actor.is_superuser() {
        ArticleVisibility::All
    } else {
        ArticleVisibility::PublishedAsOf(now)
    }
}

pub fn can_view_article(actor: &Actor, article: &Article, now: DateTime<Utc>) -> bool {
    article_scope(actor, now).admits(article)
}

/// Newest publication first; equal instants fall back to the higher id.
pub fn article_order(a: &Article, b: &Article) -> Ordering {
    b.published_at
        .cmp(&a.published_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// Newest comment first; equal instants fall back to the higher id.
pub fn comment_order(a: &Comment, b: &Comment) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

pub fn visible_articles<I>(actor: &Actor, articles: I, now: DateTime<Utc>) -> Vec<Article>
where
    I: IntoIterator<Item = Article>,
{
    let scope = article_scope(actor, now);
    let mut visible: Vec<Article> = articles
        .into_iter()
        .filter(|article| scope.admits(article))
        .collect();
    visible.sort_by(article_order);
    visible
}

/// Approved comments only, whoever is asking. Pending comments surface solely
/// through the moderation views.
pub fn visible_comments<I>(comments: I) -> Vec<Comment>
where
    I: IntoIterator<Item = Comment>,
{
    let mut visible: Vec<Comment> = comments.into_iter().filter(|c| c.approved).collect();
    visible.sort_by(comment_order);
    visible
}
