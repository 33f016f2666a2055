//! Integration tests for session endpoints and role enforcement.
//!
//! Run with: `cargo test -p server --features server --test auth_tests`

#![cfg(feature = "server")]

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    business_token, get, get_with_auth, post_json, provider_token, send, test_app, BUSINESS_EMAIL,
};
use shared_types::{AppError, AppErrorKind, AuthResponse, Role, SessionUser, INVALID_CREDENTIALS};

fn login_body(email: &str, password: &str) -> String {
    serde_json::json!({ "email": email, "password": password }).to_string()
}

#[tokio::test]
async fn login_returns_token_and_sets_session_cookie() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(login_body(BUSINESS_EMAIL, "business123")))
        .unwrap();

    let (status, headers, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let resp: AuthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(resp.user.email, BUSINESS_EMAIL);
    assert_eq!(resp.user.role, Role::Business);
    assert!(!resp.token.is_empty());

    let cookie = headers.get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("wm_session="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn login_response_never_contains_password() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        &login_body("provider@example.com", "provider123"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("provider123"));
    assert!(!body.contains("password"));
}

#[tokio::test]
async fn wrong_password_and_unknown_email_share_one_message() {
    let app = test_app();

    for (email, password) in [
        (BUSINESS_EMAIL, "wrong-password"),
        ("nobody@example.com", "business123"),
        ("BUSINESS@example.com", "business123"),
    ] {
        let (status, body) = post_json(&app, "/api/auth/login", &login_body(email, password)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{email}");
        let err: AppError = serde_json::from_str(&body).unwrap();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, INVALID_CREDENTIALS);
    }
}

#[tokio::test]
async fn malformed_email_is_a_validation_error() {
    let app = test_app();
    let (status, body) =
        post_json(&app, "/api/auth/login", &login_body("not-an-email", "x")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
}

#[tokio::test]
async fn me_returns_session_user_for_bearer_token() {
    let app = test_app();
    let token = provider_token(&app).await;

    let (status, body) = get_with_auth(&app, "/api/auth/me", &token).await;

    assert_eq!(status, StatusCode::OK);
    let user: SessionUser = serde_json::from_str(&body).unwrap();
    assert_eq!(user.email, "provider@example.com");
    assert_eq!(user.role, Role::Provider);
}

#[tokio::test]
async fn me_accepts_the_session_cookie() {
    let app = test_app();
    let token = business_token(&app).await;

    let request = Request::builder()
        .uri("/api/auth/me")
        .header("cookie", format!("wm_session={token}"))
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let user: SessionUser = serde_json::from_str(&body).unwrap();
    assert_eq!(user.role, Role::Business);
}

#[tokio::test]
async fn me_without_session_is_unauthorized() {
    let app = test_app();
    let (status, body) = get(&app, "/api/auth/me").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn corrupt_session_cookie_is_cleared() {
    let app = test_app();
    let request = Request::builder()
        .uri("/api/auth/me")
        .header("cookie", "wm_session=not-a-token")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let cookie = headers.get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("wm_session="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn logout_clears_session_cookie() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/logout")
        .body(Body::empty())
        .unwrap();

    let (status, headers, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Logged out"));
    let cookie = headers.get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn role_surfaces_reject_other_roles() {
    let app = test_app();
    let token = business_token(&app).await;

    for uri in [
        "/api/provider/dashboard",
        "/api/provider/fleet",
        "/api/government/dashboard",
        "/api/government/analytics",
    ] {
        let (status, body) = get_with_auth(&app, uri, &token).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        let err: AppError = serde_json::from_str(&body).unwrap();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
    }
}

#[tokio::test]
async fn role_surfaces_require_a_session() {
    let app = test_app();

    for uri in [
        "/api/business/dashboard",
        "/api/provider/pickups",
        "/api/government/compliance",
        "/api/waste-types",
    ] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}
