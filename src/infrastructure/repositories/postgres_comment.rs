// src/infrastructure/repositories/postgres_comment.rs
use super::{map_sqlx, postgres_article::escape_like};
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentBody, CommentFilter, CommentId, CommentReadRepository,
    CommentWriteRepository, NewComment,
};
use crate::domain::cursor::PageCursor;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COMMENT_SELECT: &str = "SELECT c.id, c.article_id, c.author_id, u.username AS author_username, \
     c.content, c.approved, c.created_at, c.updated_at \
     FROM comments c LEFT JOIN users u ON u.id = c.author_id";

#[derive(Clone)]
pub struct PostgresCommentWriteRepository {
    pool: PgPool,
}

impl PostgresCommentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCommentReadRepository {
    pool: PgPool,
}

impl PostgresCommentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    author_username: Option<String>,
    content: String,
    approved: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            author_username: row.author_username.map(Username::new).transpose()?,
            // stored rows may predate a lower length limit
            body: CommentBody::with_limit(row.content, usize::MAX)?,
            approved: row.approved,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

async fn fetch_by_id(pool: &PgPool, id: CommentId) -> DomainResult<Option<Comment>> {
    let sql = format!("{COMMENT_SELECT} WHERE c.id = $1");
    let row = sqlx::query_as::<_, CommentRow>(&sql)
        .bind(i64::from(id))
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?;

    row.map(Comment::try_from).transpose()
}

#[async_trait]
impl CommentWriteRepository for PostgresCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author_id,
            body,
            approved,
            created_at,
            updated_at,
        } = comment;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO comments (article_id, author_id, content, approved, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(author_id))
        .bind(body.as_str())
        .bind(approved)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        fetch_by_id(&self.pool, CommentId::new(id)?)
            .await?
            .ok_or_else(|| DomainError::persistence("inserted comment vanished"))
    }

    async fn approve(&self, id: CommentId, updated_at: DateTime<Utc>) -> DomainResult<Comment> {
        let result = sqlx::query(
            "UPDATE comments SET approved = TRUE, updated_at = $2
             WHERE id = $1 AND approved = FALSE",
        )
        .bind(i64::from(id))
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        tracing::debug!(comment_id = %id, rows = result.rows_affected(), "approve");

        fetch_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::not_found("comment not found"))
    }

    async fn approve_many(
        &self,
        ids: &[CommentId],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let raw: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let result = sqlx::query(
            "UPDATE comments
             SET updated_at = CASE WHEN approved THEN updated_at ELSE $2 END,
                 approved = TRUE
             WHERE id = ANY($1)",
        )
        .bind(&raw)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("comment not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl CommentReadRepository for PostgresCommentReadRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        fetch_by_id(&self.pool, id).await
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(COMMENT_SELECT);
        builder.push(" WHERE c.article_id = ");
        builder.push_bind(i64::from(article_id));
        if approved_only {
            builder.push(" AND c.approved = TRUE");
        }
        builder.push(" ORDER BY c.created_at DESC, c.id DESC");

        let rows = builder
            .build_query_as::<CommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn list_by_approval(
        &self,
        approved: bool,
        limit: Option<u32>,
    ) -> DomainResult<Vec<Comment>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(COMMENT_SELECT);
        builder.push(" WHERE c.approved = ");
        builder.push_bind(approved);
        builder.push(" ORDER BY c.created_at DESC, c.id DESC");
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<CommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn search(
        &self,
        filter: &CommentFilter,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Comment>, Option<PageCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(COMMENT_SELECT);
        builder.push(" WHERE TRUE");

        if let Some(approved) = filter.approved {
            builder.push(" AND c.approved = ");
            builder.push_bind(approved);
        }

        if let Some(term) = filter.search.as_deref() {
            let pattern = format!("%{}%", escape_like(term));
            builder.push(" AND (c.content ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR u.username ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        if let Some(cursor) = cursor {
            builder.push(" AND (c.created_at, c.id) < (");
            builder.push_bind(cursor.at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }

        builder.push(" ORDER BY c.created_at DESC, c.id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<CommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut comments = rows
            .into_iter()
            .map(Comment::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if comments.len() > limit as usize {
            comments.pop();
            if let Some(last) = comments.last() {
                next_cursor = Some(PageCursor::new(last.created_at, last.id.into()));
            }
        }

        Ok((comments, next_cursor))
    }
}
