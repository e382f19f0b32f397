// src/presentation/http/openapi/mod.rs
use axum::{Router, response::Redirect, routing::get};
use bytes::Bytes;
use std::{env, fs::File, io::BufWriter, path::Path, sync::OnceLock};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

mod handlers;
mod meta;
mod types;

pub use handlers::{head_openapi, serve_openapi};
pub use meta::{ims_matches, inm_matches, last_modified_str, weak_match};
pub use types::{ArticleListResponse, CommentListResponse, StatusResponse};

pub const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";
const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::submit_comment,
        crate::presentation::http::controllers::moderation::queue,
        crate::presentation::http::controllers::moderation::list_comments,
        crate::presentation::http::controllers::moderation::approve_comment,
        crate::presentation::http::controllers::moderation::delete_comment,
        crate::presentation::http::controllers::moderation::bulk_approve,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            CommentListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::comments::SubmitCommentRequest,
            crate::presentation::http::controllers::moderation::BulkApproveRequest,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentSubmissionDto,
            crate::application::dto::ModerationQueueDto,
            crate::application::dto::BulkApproveResultDto
        )
    ),
    tags(
        (name = "Auth", description = "Login and profile endpoints"),
        (name = "Articles", description = "Article publishing endpoints"),
        (name = "Comments", description = "Public comment endpoints"),
        (name = "Moderation", description = "Superuser comment moderation"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Blog Core API",
        description = "Blog publishing backend with moderated comments",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        if let Ok(url) = env::var("PUBLIC_API_URL") {
            let sanitized = url.trim().trim_end_matches('/');
            if !sanitized.is_empty() && sanitized != "http://localhost:3000" {
                servers.push(Server::new(sanitized));
            }
        }
        servers.push(Server::new("http://localhost:3000"));
    }
}

/// Serialized document, computed once per process.
pub fn openapi_bytes() -> &'static Bytes {
    static BYTES: OnceLock<Bytes> = OnceLock::new();
    BYTES.get_or_init(|| match serde_json::to_vec(&ApiDoc::openapi()) {
        Ok(json) => Bytes::from(json),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize OpenAPI document");
            Bytes::from_static(b"{}")
        }
    })
}

pub fn openapi_etag() -> &'static str {
    static ETAG: OnceLock<String> = OnceLock::new();
    ETAG.get_or_init(|| meta::compute_etag(openapi_bytes()))
}

pub fn openapi_content_length() -> usize {
    openapi_bytes().len()
}

pub fn openapi_content_length_str() -> &'static str {
    static LEN: OnceLock<String> = OnceLock::new();
    LEN.get_or_init(|| openapi_content_length().to_string())
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").config(Config::from("/openapi.json"));
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi).head(head_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the pretty-printed document to `OPENAPI_SNAPSHOT_PATH`
/// (default `docs/openapi.json`).
pub fn write_openapi_snapshot() -> std::io::Result<std::path::PathBuf> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests;
