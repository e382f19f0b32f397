// tests/support/helpers.rs
use super::builders::new_comment;
use super::mocks::{
    DummyPasswordHasher, InMemoryStore, ManualClock, StaticTokenManager, TEST_PASSWORD,
};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use blog_core::{
    application::{
        ports::{security::TokenManager, time::Clock},
        services::{ApplicationServices, Repositories, ServiceSettings},
        dto::TokenSubject,
    },
    domain::{
        article::{Article, ArticleWriteRepository, NewArticle},
        comment::{Comment, CommentWriteRepository},
        user::{NewUser, PasswordHash, User, UserRepository, Username},
    },
    infrastructure::util::DefaultSlugGenerator,
    presentation::http::{routes::{build_router, build_router_with_rate_limiter}, state::HttpState},
};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap());

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Services, router and backing store sharing one manual clock.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<ManualClock>,
    pub tokens: Arc<StaticTokenManager>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(ServiceSettings::default())
    }

    pub fn with_settings(settings: ServiceSettings) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let clock = Arc::new(ManualClock::new(fixed_now()));
        let clock_port: Arc<dyn Clock> = clock.clone();
        let tokens = Arc::new(StaticTokenManager::new(Arc::clone(&clock_port)));

        let repos = Repositories {
            users: store.clone(),
            article_write: store.clone(),
            article_read: store.clone(),
            comment_write: store.clone(),
            comment_read: store.clone(),
        };
        let services = Arc::new(ApplicationServices::new(
            repos,
            Arc::new(DummyPasswordHasher),
            tokens.clone(),
            clock_port,
            Arc::new(DefaultSlugGenerator),
            settings,
        ));

        Self {
            store,
            clock,
            tokens,
            services,
        }
    }

    pub fn router(&self) -> Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router_with_rate_limiter(state, false)
    }

    /// The production router, comment rate limiting included.
    pub fn rate_limited_router(&self) -> Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }

    /// Inserts a user whose password is [`TEST_PASSWORD`] and returns a
    /// bearer token for it.
    pub async fn seed_user(&self, username: &str, is_superuser: bool) -> (User, String) {
        let new_user = NewUser::new(
            Username::new(username).unwrap(),
            PasswordHash::new(format!("hashed:{TEST_PASSWORD}")).unwrap(),
            is_superuser,
            fixed_now(),
        );
        let user = UserRepository::insert(self.store.as_ref(), new_user)
            .await
            .unwrap();
        let token = self
            .tokens
            .issue(TokenSubject {
                user_id: user.id,
                username: username.to_string(),
                is_superuser,
            })
            .await
            .unwrap();
        (user, token.token)
    }

    pub async fn seed_article(&self, article: NewArticle) -> Article {
        ArticleWriteRepository::insert(self.store.as_ref(), article)
            .await
            .unwrap()
    }

    pub async fn seed_comment(
        &self,
        article: &Article,
        author: &User,
        approved: bool,
        at: DateTime<Utc>,
    ) -> Comment {
        let comment = new_comment(article.id, author.id, "seeded comment", approved, at);
        CommentWriteRepository::insert(self.store.as_ref(), comment)
            .await
            .unwrap()
    }
}

pub async fn make_test_router() -> Router {
    TestApp::new().router()
}

/// Sends one request and returns the status with the JSON body (or `Null`).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("json error body");
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message"
    );
}

/// HTTP status an application error would be reported with.
pub fn status_of(err: blog_core::application::error::ApplicationError) -> StatusCode {
    blog_core::presentation::http::error::HttpError::from_error(err).status()
}
