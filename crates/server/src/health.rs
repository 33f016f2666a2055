use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::store::DataStore;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// `"ok"` while the data store is readable.
    pub store: String,
    pub pickups: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(store): State<Arc<DataStore>>) -> Json<HealthResponse> {
    let (store_status, pickups) = match store.read(|data| data.pickups.len()) {
        Ok(count) => ("ok".to_string(), count),
        Err(e) => (format!("error: {}", e.message), 0),
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        store: store_status,
        pickups,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
