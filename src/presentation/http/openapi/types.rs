//! Response wrappers that give generic pages a concrete schema name.
use crate::application::dto::{ArticleDto, CommentDto};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Cursor page of articles.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
    /// Pass back as `cursor` to fetch the next page.
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Cursor page of comments.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CommentListResponse {
    pub items: Vec<CommentDto>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}
