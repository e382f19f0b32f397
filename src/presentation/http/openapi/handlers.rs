use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

fn validator_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ETAG,
        HeaderValue::from_static(super::openapi_etag()),
    );
    if let Ok(value) = HeaderValue::from_str(super::last_modified_str()) {
        headers.insert(header::LAST_MODIFIED, value);
    }
    headers
}

fn not_modified() -> Response {
    (StatusCode::NOT_MODIFIED, validator_headers()).into_response()
}

fn ok_response(body: Body) -> Response {
    let mut headers = validator_headers();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(super::OPENAPI_CONTENT_TYPE_JSON),
    );
    headers.insert(
        header::CONTENT_LENGTH,
        HeaderValue::from_static(super::openapi_content_length_str()),
    );
    (StatusCode::OK, headers, body).into_response()
}

/// `If-None-Match` takes precedence: when present, `If-Modified-Since` is
/// not consulted.
fn is_not_modified(headers: &HeaderMap) -> bool {
    if headers.contains_key(header::IF_NONE_MATCH) {
        super::inm_matches(headers, super::openapi_etag())
    } else {
        super::ims_matches(headers)
    }
}

/// GET /openapi.json
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    if is_not_modified(&headers) {
        return not_modified();
    }
    ok_response(Body::from(super::openapi_bytes().clone()))
}

/// HEAD /openapi.json
pub async fn head_openapi(headers: HeaderMap) -> Response {
    if is_not_modified(&headers) {
        return not_modified();
    }
    ok_response(Body::empty())
}
