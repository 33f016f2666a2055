use axum::{
    extract::{Query, State},
    Json,
};
use shared_types::query::{PickupFilter, SearchParams};
use shared_types::{
    AppError, ComplianceReportView, CustomerSummary, Fleet, PickupView, Provider,
    ProviderDashboard, StatusBreakdown, TrackingOverview,
};
use std::sync::Arc;

use super::session_user;
use crate::auth::extractors::{ProviderOnly, RoleRequired};
use crate::repo::provider;
use crate::store::DataStore;

/// Stats, upcoming pickups and fleet size for the caller's company.
#[utoipa::path(
    get,
    path = "/api/provider/dashboard",
    responses(
        (status = 200, description = "Provider dashboard", body = ProviderDashboard),
        (status = 403, description = "Not a provider user", body = AppError),
        (status = 404, description = "No linked provider", body = AppError)
    ),
    tag = "provider"
)]
pub async fn dashboard(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): ProviderOnly,
) -> Result<Json<ProviderDashboard>, AppError> {
    let user = session_user(&claims)?;
    provider::dashboard(&store, &user).map(Json)
}

/// Pickup requests assigned to the caller's company.
#[utoipa::path(
    get,
    path = "/api/provider/pickups",
    params(PickupFilter),
    responses(
        (status = 200, description = "Filtered pickups", body = Vec<PickupView>)
    ),
    tag = "provider"
)]
pub async fn list_pickups(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): ProviderOnly,
    Query(filter): Query<PickupFilter>,
) -> Result<Json<Vec<PickupView>>, AppError> {
    let user = session_user(&claims)?;
    provider::pickup_requests(&store, &user, &filter).map(Json)
}

#[utoipa::path(
    get,
    path = "/api/provider/fleet",
    responses(
        (status = 200, description = "Vehicles and drivers", body = Fleet)
    ),
    tag = "provider"
)]
pub async fn fleet(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): ProviderOnly,
) -> Result<Json<Fleet>, AppError> {
    let user = session_user(&claims)?;
    provider::fleet(&store, &user).map(Json)
}

/// Businesses served, searched on name and contact person.
#[utoipa::path(
    get,
    path = "/api/provider/customers",
    params(SearchParams),
    responses(
        (status = 200, description = "Customers with pickup totals", body = Vec<CustomerSummary>)
    ),
    tag = "provider"
)]
pub async fn customers(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): ProviderOnly,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<CustomerSummary>>, AppError> {
    let user = session_user(&claims)?;
    provider::customers(&store, &user, params.search.as_deref()).map(Json)
}

/// Routes built from dispatched pickups, with fleet counts.
#[utoipa::path(
    get,
    path = "/api/provider/tracking",
    responses(
        (status = 200, description = "Routes and tracking", body = TrackingOverview)
    ),
    tag = "provider"
)]
pub async fn tracking(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): ProviderOnly,
) -> Result<Json<TrackingOverview>, AppError> {
    let user = session_user(&claims)?;
    provider::tracking(&store, &user).map(Json)
}

#[utoipa::path(
    get,
    path = "/api/provider/compliance",
    responses(
        (status = 200, description = "Compliance reports", body = Vec<ComplianceReportView>)
    ),
    tag = "provider"
)]
pub async fn compliance(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): ProviderOnly,
) -> Result<Json<Vec<ComplianceReportView>>, AppError> {
    let user = session_user(&claims)?;
    provider::compliance(&store, &user).map(Json)
}

/// Pickup count and volume per status.
#[utoipa::path(
    get,
    path = "/api/provider/reports",
    responses(
        (status = 200, description = "Status breakdown", body = Vec<StatusBreakdown>)
    ),
    tag = "provider"
)]
pub async fn reports(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): ProviderOnly,
) -> Result<Json<Vec<StatusBreakdown>>, AppError> {
    let user = session_user(&claims)?;
    provider::reports(&store, &user).map(Json)
}

#[utoipa::path(
    get,
    path = "/api/provider/profile",
    responses(
        (status = 200, description = "Company profile", body = Provider),
        (status = 404, description = "No linked provider", body = AppError)
    ),
    tag = "provider"
)]
pub async fn profile(
    State(store): State<Arc<DataStore>>,
    RoleRequired(claims): ProviderOnly,
) -> Result<Json<Provider>, AppError> {
    let user = session_user(&claims)?;
    provider::profile(&store, &user).map(Json)
}
