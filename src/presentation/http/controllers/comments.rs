// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{ArticleRef, SubmitCommentCommand},
    dto::{CommentDto, CommentSubmissionDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitCommentRequest {
    #[schema(example = "Great read, thanks!")]
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Approved comments, newest first.", body = [CommentDto]),
        (status = 404, description = "Article not found or not visible.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_for_article(&actor.actor(), &slug)
        .await
        .into_http()
        .map(Json)
}

/// Superuser comments are published at once; others wait for moderation.
#[utoipa::path(
    post,
    path = "/api/v1/articles/by-slug/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = SubmitCommentRequest,
    responses(
        (status = 201, description = "Comment stored; `outcome` says whether it is live.", body = CommentSubmissionDto),
        (status = 400, description = "Empty or oversized comment.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many submissions.")
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn submit_comment(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<SubmitCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentSubmissionDto>)> {
    let command = SubmitCommentCommand {
        article: ArticleRef::Slug(slug),
        content: payload.content,
    };

    let submission = state
        .services
        .comment_commands
        .submit_comment(&user.actor(), command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(submission)))
}
