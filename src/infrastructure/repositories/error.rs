use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_chk";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::conflict("slug already exists"),
                    CNT_USER_USERNAME => DomainError::conflict("username already exists"),
                    CNT_ARTICLE_AUTHOR | CNT_COMMENT_AUTHOR => {
                        DomainError::not_found("author not found")
                    }
                    CNT_COMMENT_ARTICLE => DomainError::not_found("article not found"),
                    CNT_ARTICLE_STATUS_CHECK => {
                        DomainError::validation("unknown article status")
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::conflict("unique constraint violated");
                    }
                    "23503" => {
                        return DomainError::not_found("referenced record not found");
                    }
                    "23514" => {
                        return DomainError::validation("check constraint violated");
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
