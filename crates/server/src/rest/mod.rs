pub mod auth;
pub mod business;
pub mod government;
pub mod provider;
pub mod reference;

use axum::{
    routing::{get, post},
    Router,
};
use shared_types::{AppError, SessionUser};

use crate::auth::jwt::Claims;
use crate::state::AppState;

/// Session user carried by validated claims.
pub(crate) fn session_user(claims: &Claims) -> Result<SessionUser, AppError> {
    claims
        .session_user()
        .ok_or_else(|| AppError::unauthorized("Unknown role in session"))
}

/// Build the REST API router.
pub fn rest_router() -> Router<AppState> {
    Router::new()
        // Session
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // Business
        .route("/api/business/dashboard", get(business::dashboard))
        .route(
            "/api/business/pickups",
            get(business::list_pickups).post(business::create_pickup),
        )
        .route("/api/business/pickups/{id}", get(business::get_pickup))
        .route("/api/business/pickups/{id}/cancel", post(business::cancel_pickup))
        .route("/api/business/pickup-form", get(business::pickup_form))
        .route("/api/business/waste-profiles", get(business::waste_profiles))
        .route("/api/business/reports", get(business::reports))
        .route("/api/business/profile", get(business::profile))
        // Provider
        .route("/api/provider/dashboard", get(provider::dashboard))
        .route("/api/provider/pickups", get(provider::list_pickups))
        .route("/api/provider/fleet", get(provider::fleet))
        .route("/api/provider/customers", get(provider::customers))
        .route("/api/provider/tracking", get(provider::tracking))
        .route("/api/provider/compliance", get(provider::compliance))
        .route("/api/provider/reports", get(provider::reports))
        .route("/api/provider/profile", get(provider::profile))
        // Government
        .route("/api/government/dashboard", get(government::dashboard))
        .route("/api/government/businesses", get(government::businesses))
        .route("/api/government/providers", get(government::providers))
        .route("/api/government/compliance", get(government::compliance))
        .route("/api/government/analytics", get(government::analytics))
        .route("/api/government/reports", get(government::reports))
        // Reference data
        .route("/api/waste-types", get(reference::waste_types))
        .route("/api/providers", get(reference::providers))
}
