use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    middleware, Router,
};
use server::state::AppState;
use server::store::DataStore;
use shared_types::{AppConfig, AuthResponse, DemoConfig, FeatureFlags};
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

pub const BUSINESS_EMAIL: &str = "business@example.com";
pub const PROVIDER_EMAIL: &str = "provider@example.com";
pub const GOVERNMENT_EMAIL: &str = "government@example.com";

/// Seeded pickups.
pub const SCHEDULED_PICKUP: &str = "1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d";
pub const COMPLETED_PICKUP: &str = "2b3c4d5e-6f7a-8b9c-0d1e-2f3a4b5c6d7e";
pub const OTHER_BUSINESS_PICKUP: &str = "3c4d5e6f-7a8b-9c0d-1e2f-3a4b5c6d7e8f";

/// Shared store that validates and echoes mutations without keeping them,
/// so read assertions hold no matter which tests ran first.
static SHARED_STORE: OnceLock<Arc<DataStore>> = OnceLock::new();

fn setup_test_secret() {
    std::env::set_var("JWT_SECRET", "test-secret-key-for-server-integration");
}

fn config(persist_mutations: bool) -> AppConfig {
    AppConfig {
        features: FeatureFlags {
            persist_mutations,
            ..FeatureFlags::default()
        },
        demo: DemoConfig::instant(),
    }
}

fn router(store: Arc<DataStore>) -> Router {
    setup_test_secret();
    server::rest::rest_router()
        .route("/health", axum::routing::get(server::health::health_check))
        .layer(middleware::from_fn(server::auth::middleware::auth_middleware))
        .with_state(AppState::new(store))
}

#[allow(dead_code)]
/// Router over the shared, non-persisting store.
pub fn test_app() -> Router {
    let store = SHARED_STORE
        .get_or_init(|| {
            Arc::new(DataStore::from_seed(config(false)).expect("seed data should load"))
        })
        .clone();
    router(store)
}

#[allow(dead_code)]
/// Router over a private store that keeps mutations.
pub fn fresh_app() -> Router {
    let store = DataStore::from_seed(config(true)).expect("seed data should load");
    router(Arc::new(store))
}

#[allow(dead_code)]
/// Send a request and return (status, headers, body).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, _, body) = send(app, request).await;
    (status, body)
}

#[allow(dead_code)]
/// Helper to make a GET request with Bearer auth.
pub async fn get_with_auth(app: &Router, uri: &str, token: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, body)
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body.
pub async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, body)
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body and Bearer auth.
pub async fn post_json_with_auth(
    app: &Router,
    uri: &str,
    json: &str,
    token: &str,
) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(json.to_string()))
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, body)
}

#[allow(dead_code)]
/// Log in with a seeded account and return the session token.
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let json = serde_json::json!({ "email": email, "password": password });
    let (status, body) = post_json(app, "/api/auth/login", &json.to_string()).await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    let resp: AuthResponse = serde_json::from_str(&body).unwrap();
    resp.token
}

#[allow(dead_code)]
pub async fn business_token(app: &Router) -> String {
    login(app, BUSINESS_EMAIL, "business123").await
}

#[allow(dead_code)]
pub async fn provider_token(app: &Router) -> String {
    login(app, PROVIDER_EMAIL, "provider123").await
}

#[allow(dead_code)]
pub async fn government_token(app: &Router) -> String {
    login(app, GOVERNMENT_EMAIL, "government123").await
}
