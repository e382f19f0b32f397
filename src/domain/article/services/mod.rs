// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{
    ArticleId, ArticleSlug, ArticleTitle, SLUG_MAX_LEN,
};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Derive a slug from `title`, suffixing `-1`, `-2`, ... until no other
    /// article holds it. `ignore_id` lets an article keep its own slug.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("article-{}", now.timestamp())
        } else {
            base
        };

        let mut candidate = fit_slug(&base_slug, "");
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate)?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id == Some(existing.id) => return Ok(slug),
                Some(_) => {
                    candidate = fit_slug(&base_slug, &format!("-{counter}"));
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }

    /// Accept a caller-chosen slug if it is free (or already ours).
    pub async fn ensure_available(
        &self,
        slug: &ArticleSlug,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<bool> {
        Ok(match self.read_repo.find_by_slug(slug).await? {
            Some(existing) => ignore_id == Some(existing.id),
            None => true,
        })
    }
}

/// Cuts `base` so that `base + suffix` stays within the slug length limit,
/// dropping any hyphen left dangling at the cut.
fn fit_slug(base: &str, suffix: &str) -> String {
    let mut cut = base.len().min(SLUG_MAX_LEN.saturating_sub(suffix.len()));
    while !base.is_char_boundary(cut) {
        cut -= 1;
    }
    let head = base[..cut].trim_end_matches('-');
    format!("{head}{suffix}")
}
