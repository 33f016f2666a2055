use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    middleware, Router,
};
use serde_json::Value;
use server::state::AppState;
use server::store::DataStore;
use shared_types::{AppConfig, DemoConfig, FeatureFlags};
use std::sync::Arc;
use tower::ServiceExt;

pub const BUSINESS: (&str, &str) = ("business@example.com", "business123");
pub const PROVIDER: (&str, &str) = ("provider@example.com", "provider123");
pub const GOVERNMENT: (&str, &str) = ("government@example.com", "government123");

pub const GREEN_SOLUTIONS: &str = "a7c53e1d-9b4f-4c8a-8d7e-2b3a1c5f9e8d";
pub const TECH_INNOVATORS: &str = "b8d9e2f1-7c6b-5a4d-3e2f-1a0b9c8d7e6f";
pub const ECO_WASTE: &str = "f7e6d5c4-b3a2-1d0e-9f8a-7b6c5d4e3f2";
pub const PLASTIC: &str = "a1b2c3d4-e5f6-7a8b-9c0d-1e2f3a4b5c6d";
pub const SCHEDULED_PICKUP: &str = "1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d";

/// Build a router over a private seeded store with no simulated latency.
///
/// Every test gets its own store, so mutations never leak between tests.
pub fn test_app() -> (Router, Arc<DataStore>) {
    std::env::set_var("JWT_SECRET", "test-secret-key-for-scenario-tests");

    let config = AppConfig {
        features: FeatureFlags::default(),
        demo: DemoConfig::instant(),
    };
    let store = Arc::new(DataStore::from_seed(config).expect("seed data should load"));

    let router = server::rest::rest_router()
        .layer(middleware::from_fn(server::auth::middleware::auth_middleware))
        .with_state(AppState::new(store.clone()));

    (router, store)
}

/// What a response looks like to a test: status, headers, parsed body.
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl Reply {
    /// The `name=value` part of the first `Set-Cookie` header.
    pub fn session_cookie(&self) -> Option<String> {
        let raw = self.headers.get(header::SET_COOKIE)?.to_str().ok()?;
        raw.split(';').next().map(str::to_string)
    }

    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.body.clone()).expect("response body should deserialize")
    }
}

/// How a request proves its session.
#[derive(Clone, Copy)]
pub enum Auth<'a> {
    None,
    Bearer(&'a str),
    Cookie(&'a str),
}

pub async fn get(app: &Router, uri: &str, auth: Auth<'_>) -> Reply {
    let req = with_auth(Request::builder().method("GET").uri(uri), auth)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value, auth: Auth<'_>) -> Reply {
    let req = with_auth(Request::builder().method("POST").uri(uri), auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// Log in and return the reply; the caller decides which credential to use.
pub async fn login(app: &Router, (email, password): (&str, &str)) -> Reply {
    post_json(
        app,
        "/api/auth/login",
        &serde_json::json!({ "email": email, "password": password }),
        Auth::None,
    )
    .await
}

/// Log in and return the bearer token, panicking on failure.
pub async fn token(app: &Router, account: (&str, &str)) -> String {
    let reply = login(app, account).await;
    assert_eq!(reply.status, StatusCode::OK, "login failed: {}", reply.body);
    reply.body["token"].as_str().unwrap().to_string()
}

fn with_auth(builder: axum::http::request::Builder, auth: Auth<'_>) -> axum::http::request::Builder {
    match auth {
        Auth::None => builder,
        Auth::Bearer(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        Auth::Cookie(cookie) => builder.header(header::COOKIE, cookie),
    }
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> Reply {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    Reply {
        status,
        headers,
        body,
    }
}
