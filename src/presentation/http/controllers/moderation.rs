// src/presentation/http/controllers/moderation.rs
use crate::application::{
    commands::comments::BulkApproveCommand,
    dto::{BulkApproveResultDto, CommentDto, CursorPage, ModerationQueueDto},
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    /// Restrict to approved (`true`) or pending (`false`) comments.
    #[serde(default)]
    pub approved: Option<bool>,
    /// Case-insensitive search over content and author username.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkApproveRequest {
    #[schema(example = json!([1, 2, 3]))]
    pub ids: Vec<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/moderation/queue",
    responses(
        (status = 200, description = "Every pending comment plus the newest approved ones.", body = ModerationQueueDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Superusers only.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn queue(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
) -> HttpResult<Json<ModerationQueueDto>> {
    state
        .services
        .comment_queries
        .moderation_queue(&user.actor())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/moderation/comments",
    params(CommentListParams),
    responses(
        (status = 200, description = "Comments across all articles, newest first.", body = crate::presentation::http::openapi::CommentListResponse),
        (status = 400, description = "Invalid cursor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Superusers only.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<CursorPage<CommentDto>>> {
    let query = ListCommentsQuery {
        approved: params.approved,
        q: params.q,
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .comment_queries
        .list_comments(&user.actor(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/moderation/comments/{id}/approve",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Comment approved (idempotent).", body = CommentDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Superusers only.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn approve_comment(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .approve_comment(&user.actor(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/moderation/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Superusers only.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(&user.actor(), id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/moderation/comments/approve",
    request_body = BulkApproveRequest,
    responses(
        (status = 200, description = "Number of listed comments that exist and are now approved.", body = BulkApproveResultDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Superusers only.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn bulk_approve(
    Extension(state): Extension<HttpState>,
    user: Authenticated,
    Json(payload): Json<BulkApproveRequest>,
) -> HttpResult<Json<BulkApproveResultDto>> {
    state
        .services
        .comment_commands
        .bulk_approve(&user.actor(), BulkApproveCommand { ids: payload.ids })
        .await
        .into_http()
        .map(Json)
}
