use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use shared_types::query::PickupFilter;
use shared_types::{
    AppError, Business, BusinessDashboard, CreatePickupRequest, PickupDetail, PickupFormOptions,
    PickupRequest, PickupView, VolumeByWasteType, WasteProfileView,
};
use std::sync::Arc;

use super::session_user;
use crate::auth::extractors::{BusinessOnly, RoleRequired};
use crate::repo::business;
use crate::store::DataStore;

// ---------------------------------------------------------------------------
// GET /api/business/dashboard
// ---------------------------------------------------------------------------

/// Stats and recent pickups for the caller's business.
#[utoipa::path(
    get,
    path = "/api/business/dashboard",
    responses(
        (status = 200, description = "Business dashboard", body = BusinessDashboard),
        (status = 401, description = "No session", body = AppError),
        (status = 403, description = "Not a business user", body = AppError),
        (status = 404, description = "No linked business", body = AppError)
    ),
    tag = "business"
)]
pub async fn dashboard(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): BusinessOnly,
) -> Result<Json<BusinessDashboard>, AppError> {
    let user = session_user(&claims)?;
    business::dashboard(&store, &user).map(Json)
}

// ---------------------------------------------------------------------------
// GET /api/business/pickups
// ---------------------------------------------------------------------------

/// The caller's pickups, newest first.
#[utoipa::path(
    get,
    path = "/api/business/pickups",
    params(PickupFilter),
    responses(
        (status = 200, description = "Filtered pickups", body = Vec<PickupView>),
        (status = 403, description = "Not a business user", body = AppError)
    ),
    tag = "business"
)]
pub async fn list_pickups(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): BusinessOnly,
    Query(filter): Query<PickupFilter>,
) -> Result<Json<Vec<PickupView>>, AppError> {
    let user = session_user(&claims)?;
    business::pickups(&store, &user, &filter).map(Json)
}

// ---------------------------------------------------------------------------
// POST /api/business/pickups
// ---------------------------------------------------------------------------

/// Request a new pickup for the caller's business.
#[utoipa::path(
    post,
    path = "/api/business/pickups",
    request_body = CreatePickupRequest,
    responses(
        (status = 201, description = "Pickup scheduled", body = PickupRequest),
        (status = 422, description = "Invalid form", body = AppError),
        (status = 403, description = "Not a business user", body = AppError)
    ),
    tag = "business"
)]
#[tracing::instrument(skip(store, claims, body))]
pub async fn create_pickup(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): BusinessOnly,
    Json(body): Json<CreatePickupRequest>,
) -> Result<(StatusCode, Json<PickupRequest>), AppError> {
    let user = session_user(&claims)?;
    let pickup = business::create_pickup(&store, &user, body).await?;
    Ok((StatusCode::CREATED, Json(pickup)))
}

// ---------------------------------------------------------------------------
// GET /api/business/pickups/{id}
// ---------------------------------------------------------------------------

/// One of the caller's pickups with every reference resolved.
#[utoipa::path(
    get,
    path = "/api/business/pickups/{id}",
    params(("id" = String, Path, description = "Pickup id")),
    responses(
        (status = 200, description = "Pickup detail", body = PickupDetail),
        (status = 403, description = "Pickup belongs to another business", body = AppError),
        (status = 404, description = "Pickup not found", body = AppError)
    ),
    tag = "business"
)]
pub async fn get_pickup(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): BusinessOnly,
    Path(id): Path<String>,
) -> Result<Json<PickupDetail>, AppError> {
    let user = session_user(&claims)?;
    business::pickup_detail(&store, &user, &id).map(Json)
}

// ---------------------------------------------------------------------------
// POST /api/business/pickups/{id}/cancel
// ---------------------------------------------------------------------------

/// Cancel a scheduled pickup.
#[utoipa::path(
    post,
    path = "/api/business/pickups/{id}/cancel",
    params(("id" = String, Path, description = "Pickup id")),
    responses(
        (status = 200, description = "Pickup cancelled", body = PickupRequest),
        (status = 400, description = "Pickup is not scheduled", body = AppError),
        (status = 403, description = "Pickup belongs to another business", body = AppError),
        (status = 404, description = "Pickup not found", body = AppError)
    ),
    tag = "business"
)]
#[tracing::instrument(skip(store, claims))]
pub async fn cancel_pickup(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): BusinessOnly,
    Path(id): Path<String>,
) -> Result<Json<PickupRequest>, AppError> {
    let user = session_user(&claims)?;
    business::cancel_pickup(&store, &user, &id).await.map(Json)
}

// ---------------------------------------------------------------------------
// GET /api/business/pickup-form
// ---------------------------------------------------------------------------

/// Choices and defaults for the request-pickup form.
#[utoipa::path(
    get,
    path = "/api/business/pickup-form",
    responses(
        (status = 200, description = "Form options", body = PickupFormOptions)
    ),
    tag = "business"
)]
pub async fn pickup_form(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): BusinessOnly,
) -> Result<Json<PickupFormOptions>, AppError> {
    let user = session_user(&claims)?;
    business::request_form(&store, &user).map(Json)
}

// ---------------------------------------------------------------------------
// GET /api/business/waste-profiles
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/business/waste-profiles",
    responses(
        (status = 200, description = "Waste profiles", body = Vec<WasteProfileView>)
    ),
    tag = "business"
)]
pub async fn waste_profiles(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): BusinessOnly,
) -> Result<Json<Vec<WasteProfileView>>, AppError> {
    let user = session_user(&claims)?;
    business::waste_profiles(&store, &user).map(Json)
}

// ---------------------------------------------------------------------------
// GET /api/business/reports
// ---------------------------------------------------------------------------

/// Pickup volume per waste type.
#[utoipa::path(
    get,
    path = "/api/business/reports",
    responses(
        (status = 200, description = "Volume per waste type", body = Vec<VolumeByWasteType>)
    ),
    tag = "business"
)]
pub async fn reports(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): BusinessOnly,
) -> Result<Json<Vec<VolumeByWasteType>>, AppError> {
    let user = session_user(&claims)?;
    business::reports(&store, &user).map(Json)
}

// ---------------------------------------------------------------------------
// GET /api/business/profile
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/business/profile",
    responses(
        (status = 200, description = "Business profile", body = Business),
        (status = 404, description = "No linked business", body = AppError)
    ),
    tag = "business"
)]
pub async fn profile(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): BusinessOnly,
) -> Result<Json<Business>, AppError> {
    let user = session_user(&claims)?;
    business::profile(&store, &user).map(Json)
}
