use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleStatus};
use crate::domain::cursor::PageCursor;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use crate::domain::visibility::ArticleVisibility;
use async_trait::async_trait;

/// Listing criteria. `visibility` is always applied; the remaining fields
/// narrow the result further.
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    pub visibility: ArticleVisibility,
    pub status: Option<ArticleStatus>,
    pub author_id: Option<UserId>,
    pub search: Option<String>,
}

impl ArticleFilter {
    pub fn new(visibility: ArticleVisibility) -> Self {
        Self {
            visibility,
            status: None,
            author_id: None,
            search: None,
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        if !self.visibility.admits(article) {
            return false;
        }
        if self.status.is_some_and(|status| article.status != status) {
            return false;
        }
        if self.author_id.is_some_and(|author| article.author_id != author) {
            return false;
        }
        match self.search.as_deref() {
            Some(term) => {
                let term = term.to_lowercase();
                article.title.as_str().to_lowercase().contains(&term)
                    || article.content.as_str().to_lowercase().contains(&term)
            }
            None => true,
        }
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article and, atomically, every comment attached to it.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Newest `published_at` first, ties broken by descending id.
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Article>, Option<PageCursor>)>;
}
