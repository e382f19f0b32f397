// tests/e2e_http.rs
mod support;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::json;
use support::*;
use tower::ServiceExt;

#[tokio::test]
async fn health_is_public() {
    let app = make_test_router().await;
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn login_then_fetch_profile() {
    let test = TestApp::new();
    test.seed_user("admin", true).await;
    let app = test.router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": "admin", "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["is_superuser"], true);
    let token = body["token"]["token"].as_str().unwrap().to_string();

    let (status, profile) = send(&app, Method::GET, "/api/v1/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["user"]["username"], "admin");
    assert_eq!(profile["can_moderate"], true);
    assert_eq!(profile["expires_in"], 3600);
}

#[tokio::test]
async fn login_failures_map_to_401_and_403() {
    let test = TestApp::new();
    let (member, _) = test.seed_user("member", false).await;
    let app = test.router();

    for payload in [
        json!({ "username": "member", "password": "wrong password" }),
        json!({ "username": "nobody", "password": TEST_PASSWORD }),
        json!({ "username": "x", "password": TEST_PASSWORD }),
    ] {
        let (status, body) =
            send(&app, Method::POST, "/api/v1/auth/login", None, Some(payload)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");
    }

    test.store.deactivate(member.id);
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": "member", "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn protected_routes_reject_missing_or_bad_tokens() {
    let app = make_test_router().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/auth/me")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/articles")
        .header(header::AUTHORIZATION, "Bearer forged")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn article_lifecycle_over_http() {
    let test = TestApp::new();
    let (_, token) = test.seed_user("writer", false).await;
    let (_, other_token) = test.seed_user("other", false).await;
    let app = test.router();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/articles",
        Some(&token),
        Some(json!({ "title": "My First Post", "content": "Hello", "status": "published" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "my-first-post");
    assert_eq!(created["published_at"], "2024-05-20T12:00:00Z");
    let id = created["id"].as_i64().unwrap();

    let (status, list) = send(&app, Method::GET, "/api/v1/articles", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["items"].as_array().unwrap().len(), 1);
    assert_eq!(list["has_more"], false);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/articles/{id}"),
        Some(&other_token),
        Some(json!({ "title": "Hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/articles/{id}"),
        Some(&token),
        Some(json!({ "content": "Hello again" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["content"], "Hello again");

    let (status, detail) = send(
        &app,
        Method::GET,
        "/api/v1/articles/by-slug/my-first-post",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["article"]["id"], id);
    assert_eq!(detail["comments"], json!([]));

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/articles/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/articles/by-slug/my-first-post",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn drafts_are_404_for_anonymous_and_status_filter_is_403_for_members() {
    let test = TestApp::new();
    let (admin, admin_token) = test.seed_user("admin", true).await;
    let (_, member_token) = test.seed_user("member", false).await;
    test.seed_article(ArticleBuilder::new().title("Hidden").draft().author(admin.id).build())
        .await;
    let app = test.router();

    let (status, _) = send(&app, Method::GET, "/api/v1/articles/by-slug/hidden", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/articles/by-slug/hidden",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/articles?status=draft",
        Some(&member_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden");

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/articles?status=draft",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["slug"], "hidden");

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/articles?status=bogus",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn comment_submission_and_moderation_over_http() {
    let test = TestApp::new();
    let (admin, admin_token) = test.seed_user("admin", true).await;
    let (_, member_token) = test.seed_user("member", false).await;
    test.seed_article(ArticleBuilder::new().title("Talk").author(admin.id).build())
        .await;
    let app = test.router();
    let comments_uri = "/api/v1/articles/by-slug/talk/comments";

    let (status, _) = send(
        &app,
        Method::POST,
        comments_uri,
        None,
        Some(json!({ "content": "anon" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, submitted) = send(
        &app,
        Method::POST,
        comments_uri,
        Some(&member_token),
        Some(json!({ "content": "Interesting!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(submitted["outcome"], "pending_moderation");
    assert_eq!(submitted["comment"]["approved"], false);
    let comment_id = submitted["comment"]["id"].as_i64().unwrap();

    let (status, public) = send(&app, Method::GET, comments_uri, Some(&member_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(public, json!([]));

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/moderation/queue",
        Some(&member_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, queue) = send(
        &app,
        Method::GET,
        "/api/v1/moderation/queue",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queue["pending"][0]["id"], comment_id);
    assert_eq!(queue["pending"][0]["author_username"], "member");

    let approve_uri = format!("/api/v1/moderation/comments/{comment_id}/approve");
    for _ in 0..2 {
        let (status, approved) =
            send(&app, Method::POST, &approve_uri, Some(&admin_token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(approved["approved"], true);
    }

    let (_, public) = send(&app, Method::GET, comments_uri, None, None).await;
    assert_eq!(public[0]["content"], "Interesting!");

    let (status, listing) = send(
        &app,
        Method::GET,
        "/api/v1/moderation/comments?approved=true&q=interest",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["items"].as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/moderation/comments/999/approve",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/moderation/comments/{comment_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, public) = send(&app, Method::GET, comments_uri, None, None).await;
    assert_eq!(public, json!([]));
}

#[tokio::test]
async fn bulk_approve_over_http() {
    let test = TestApp::new();
    let (admin, admin_token) = test.seed_user("admin", true).await;
    let (member, _) = test.seed_user("member", false).await;
    let article = test
        .seed_article(ArticleBuilder::new().title("Bulk").author(admin.id).build())
        .await;
    let a = test.seed_comment(&article, &member, false, fixed_now()).await;
    let b = test.seed_comment(&article, &member, false, fixed_now()).await;
    let app = test.router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/moderation/comments/approve",
        Some(&admin_token),
        Some(json!({ "ids": [a.id.0, b.id.0, 12345] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["approved"], 2);

    let (_, queue) = send(
        &app,
        Method::GET,
        "/api/v1/moderation/queue",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(queue["pending"], json!([]));
    assert_eq!(queue["recently_approved"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn comment_submissions_are_rate_limited_per_client() {
    let test = TestApp::new();
    let (admin, _) = test.seed_user("admin", true).await;
    let (_, token) = test.seed_user("chatty", false).await;
    test.seed_article(ArticleBuilder::new().title("Busy").author(admin.id).build())
        .await;
    let app = test.rate_limited_router();

    let submit = |ip: &'static str| {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/articles/by-slug/busy/comments")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", ip)
            .body(Body::from(json!({ "content": "again" }).to_string()))
            .unwrap()
    };

    for _ in 0..5 {
        let resp = app.clone().oneshot(submit("203.0.113.9")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
    let resp = app.clone().oneshot(submit("203.0.113.9")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    let resp = app.clone().oneshot(submit("198.51.100.4")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let comments_uri = "/api/v1/articles/by-slug/busy/comments";
    let (status, _) = send(&app, Method::GET, comments_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
}
