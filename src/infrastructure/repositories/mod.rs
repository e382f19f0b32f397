// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_comment::{PostgresCommentReadRepository, PostgresCommentWriteRepository};
pub use postgres_user::PostgresUserRepository;

use crate::application::services::Repositories;
use sqlx::PgPool;
use std::sync::Arc;

/// Every repository port backed by the same Postgres pool.
pub fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        comment_write: Arc::new(PostgresCommentWriteRepository::new(pool.clone())),
        comment_read: Arc::new(PostgresCommentReadRepository::new(pool.clone())),
    }
}
