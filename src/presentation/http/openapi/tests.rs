// src/presentation/http/openapi/tests.rs
use super::*;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use std::time::{Duration, SystemTime};

#[test]
fn weak_match_ignores_weak_prefix_and_escapes() {
    assert!(weak_match(r#"W/"abc""#, r#""abc""#));
    assert!(weak_match(r#"w/\"abc\""#, r#""abc""#));
    assert!(!weak_match(r#""abc""#, r#""def""#));
}

#[test]
fn inm_matches_star_and_lists() {
    let mut headers = HeaderMap::new();
    headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("*"));
    assert!(inm_matches(&headers, r#""anything""#));

    headers.insert(
        header::IF_NONE_MATCH,
        HeaderValue::from_static("\"foo\", W/\"bar\""),
    );
    assert!(inm_matches(&headers, r#""bar""#));
    assert!(!inm_matches(&headers, r#""baz""#));
}

#[test]
fn etag_is_stable_and_quoted() {
    let etag = openapi_etag();
    assert!(etag.starts_with('"') && etag.ends_with('"'));
    assert_eq!(etag.len(), 34);
    assert_eq!(etag, meta::compute_etag(openapi_bytes()));
}

#[test]
fn document_lists_every_route() {
    let json: serde_json::Value = serde_json::from_slice(openapi_bytes()).unwrap();
    let paths = json["paths"].as_object().unwrap();
    for path in [
        "/health",
        "/api/v1/auth/login",
        "/api/v1/auth/me",
        "/api/v1/articles",
        "/api/v1/articles/{id}",
        "/api/v1/articles/by-slug/{slug}",
        "/api/v1/articles/by-slug/{slug}/comments",
        "/api/v1/moderation/queue",
        "/api/v1/moderation/comments",
        "/api/v1/moderation/comments/{id}",
        "/api/v1/moderation/comments/{id}/approve",
        "/api/v1/moderation/comments/approve",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(json["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn matching_if_none_match_yields_not_modified() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::IF_NONE_MATCH,
        HeaderValue::from_static(openapi_etag()),
    );

    let resp = serve_openapi(headers).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(resp.headers()[header::ETAG], openapi_etag());
}

#[tokio::test]
async fn stale_if_none_match_wins_over_fresh_if_modified_since() {
    let mut headers = HeaderMap::new();
    headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("\"stale\""));
    let future = httpdate::fmt_http_date(SystemTime::now() + Duration::from_secs(3600));
    headers.insert(
        header::IF_MODIFIED_SINCE,
        HeaderValue::from_str(&future).unwrap(),
    );

    let resp = serve_openapi(headers).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn if_modified_since_after_startup_yields_not_modified() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::IF_MODIFIED_SINCE,
        HeaderValue::from_str(last_modified_str()).unwrap(),
    );
    let resp = head_openapi(headers).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn head_sets_length_without_body() {
    let resp = head_openapi(HeaderMap::new()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers[header::CONTENT_TYPE], OPENAPI_CONTENT_TYPE_JSON);
    assert_eq!(
        headers[header::CONTENT_LENGTH].to_str().unwrap(),
        openapi_content_length().to_string()
    );
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}
