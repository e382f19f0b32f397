// tests/support/mocks/store.rs
//! One in-memory database behind every repository port, with the same
//! uniqueness, cascade and ordering rules as the Postgres schema.
use async_trait::async_trait;
use blog_core::domain::{
    PageCursor,
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
        ArticleWriteRepository, NewArticle,
    },
    comment::{
        Comment, CommentFilter, CommentId, CommentReadRepository, CommentWriteRepository,
        NewComment,
    },
    errors::{DomainError, DomainResult},
    user::{NewUser, User, UserId, UserRepository, Username},
    visibility::{article_order, comment_order},
};
use chrono::{DateTime, Utc};
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
    next_user: i64,
    next_article: i64,
    next_comment: i64,
}

impl Tables {
    fn with_username(&self, mut comment: Comment) -> Comment {
        comment.author_username = self
            .users
            .iter()
            .find(|u| u.id == comment.author_id)
            .map(|u| u.username.clone());
        comment
    }

    fn comments_where(&self, keep: impl Fn(&Comment) -> bool) -> Vec<Comment> {
        let mut out: Vec<Comment> = self
            .comments
            .iter()
            .cloned()
            .map(|c| self.with_username(c))
            .filter(|c| keep(c))
            .collect();
        out.sort_by(comment_order);
        out
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn article_count(&self) -> usize {
        self.tables.lock().unwrap().articles.len()
    }

    pub fn comment_count(&self) -> usize {
        self.tables.lock().unwrap().comments.len()
    }

    pub fn comments_of(&self, article_id: ArticleId) -> Vec<Comment> {
        let tables = self.tables.lock().unwrap();
        tables.comments_where(|c| c.article_id == article_id)
    }

    pub fn comment(&self, id: CommentId) -> Option<Comment> {
        let tables = self.tables.lock().unwrap();
        tables.comments_where(|c| c.id == id).into_iter().next()
    }

    pub fn deactivate(&self, id: UserId) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(user) = tables.users.iter_mut().find(|u| u.id == id) {
            user.is_active = false;
        }
    }
}

fn page<T: Clone>(
    mut rows: Vec<T>,
    limit: u32,
    position: impl Fn(&T) -> PageCursor,
) -> (Vec<T>, Option<PageCursor>) {
    let limit = limit as usize;
    if rows.len() > limit {
        rows.truncate(limit);
        let next = rows.last().map(&position);
        (rows, next)
    } else {
        (rows, None)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        tables.next_user += 1;
        let user = User {
            id: UserId::new(tables.next_user)?,
            username: new_user.username,
            password_hash: new_user.password_hash,
            is_superuser: new_user.is_superuser,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tables = self.tables.lock().unwrap();
        if tables.articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("article slug already exists".into()));
        }
        if !tables.users.iter().any(|u| u.id == article.author_id) {
            return Err(DomainError::not_found("author not found"));
        }
        tables.next_article += 1;
        let created = Article {
            id: ArticleId::new(tables.next_article)?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            status: article.status,
            published_at: article.published_at,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        tables.articles.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(slug) = &update.slug {
            if tables
                .articles
                .iter()
                .any(|a| &a.slug == slug && a.id != update.id)
            {
                return Err(DomainError::Conflict("article slug already exists".into()));
            }
        }
        let article = tables
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::not_found("article not found"))?;
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(status) = update.status {
            article.status = status;
        }
        if let Some(published_at) = update.published_at {
            article.published_at = published_at;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.articles.len();
        tables.articles.retain(|a| a.id != id);
        if tables.articles.len() == before {
            return Err(DomainError::not_found("article not found"));
        }
        tables.comments.retain(|c| c.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Article>, Option<PageCursor>)> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Article> = tables
            .articles
            .iter()
            .filter(|a| filter.matches(a))
            .filter(|a| cursor.is_none_or(|c| c.precedes(a.published_at, a.id.0)))
            .cloned()
            .collect();
        rows.sort_by(article_order);
        Ok(page(rows, limit, |a| PageCursor::new(a.published_at, a.id.0)))
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.articles.iter().any(|a| a.id == comment.article_id) {
            return Err(DomainError::not_found("article not found"));
        }
        tables.next_comment += 1;
        let created = Comment {
            id: CommentId::new(tables.next_comment)?,
            article_id: comment.article_id,
            author_id: comment.author_id,
            author_username: None,
            body: comment.body,
            approved: comment.approved,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        };
        tables.comments.push(created.clone());
        Ok(tables.with_username(created))
    }

    async fn approve(&self, id: CommentId, updated_at: DateTime<Utc>) -> DomainResult<Comment> {
        let mut tables = self.tables.lock().unwrap();
        let comment = tables
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("comment not found"))?;
        if !comment.approved {
            comment.approved = true;
            comment.updated_at = updated_at;
        }
        let approved = comment.clone();
        Ok(tables.with_username(approved))
    }

    async fn approve_many(
        &self,
        ids: &[CommentId],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut tables = self.tables.lock().unwrap();
        let mut matched = 0;
        for comment in tables.comments.iter_mut().filter(|c| ids.contains(&c.id)) {
            matched += 1;
            if !comment.approved {
                comment.approved = true;
                comment.updated_at = updated_at;
            }
        }
        Ok(matched)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        if tables.comments.len() == before {
            return Err(DomainError::not_found("comment not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.comment(id))
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.comments_where(|c| c.article_id == article_id && (c.approved || !approved_only)))
    }

    async fn list_by_approval(
        &self,
        approved: bool,
        limit: Option<u32>,
    ) -> DomainResult<Vec<Comment>> {
        let tables = self.tables.lock().unwrap();
        let mut rows = tables.comments_where(|c| c.approved == approved);
        if let Some(limit) = limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn search(
        &self,
        filter: &CommentFilter,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Comment>, Option<PageCursor>)> {
        let tables = self.tables.lock().unwrap();
        let rows = tables.comments_where(|c| {
            filter.matches(c) && cursor.is_none_or(|cur| cur.precedes(c.created_at, c.id.0))
        });
        Ok(page(rows, limit, |c| PageCursor::new(c.created_at, c.id.0)))
    }
}
