// src/presentation/http/openapi/meta.rs
use axum::http::{HeaderMap, header};
use std::sync::OnceLock;
use std::time::SystemTime;

static STARTUP_DATE: OnceLock<String> = OnceLock::new();

/// `BUILD_DATE` when baked in at compile time, otherwise process start.
pub fn last_modified_str() -> &'static str {
    match option_env!("BUILD_DATE") {
        Some(value) => value,
        None => STARTUP_DATE
            .get_or_init(|| httpdate::fmt_http_date(SystemTime::now()))
            .as_str(),
    }
}

/// Strong ETag from the first 16 bytes of the BLAKE3 digest.
pub(crate) fn compute_etag(bytes: &[u8]) -> String {
    let digest = blake3::hash(bytes);
    format!("\"{}\"", &digest.to_hex()[..32])
}

/// The opaque part of an entity tag: no `W/` prefix, quotes or escapes.
fn etag_value(token: &str) -> String {
    let token = token.trim();
    let token = token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token);

    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            '"' => {}
            other => out.push(other),
        }
    }
    out
}

/// Weak comparison (RFC 9110 §8.8.3.2).
pub fn weak_match(a: &str, b: &str) -> bool {
    etag_value(a) == etag_value(b)
}

/// True when `If-None-Match` is `*` or lists a tag weakly equal to `actual`.
pub fn inm_matches(headers: &HeaderMap, actual: &str) -> bool {
    let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let value = value.trim();
    value == "*" || value.split(',').any(|candidate| weak_match(candidate, actual))
}

/// True when `If-Modified-Since` is at or after our Last-Modified.
pub fn ims_matches(headers: &HeaderMap) -> bool {
    let Some(since) = headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| httpdate::parse_http_date(v.trim()).ok())
    else {
        return false;
    };
    httpdate::parse_http_date(last_modified_str())
        .map(|modified| modified <= since)
        .unwrap_or(false)
}
