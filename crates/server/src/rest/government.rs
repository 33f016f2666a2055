use axum::{
    extract::{Query, State},
    Json,
};
use shared_types::query::{ReportFilter, SearchParams};
use shared_types::{
    Analytics, AppError, Business, ComplianceReportView, GovernmentDashboard, Provider,
    ProviderActivity,
};
use std::sync::Arc;

use crate::auth::extractors::GovernmentOnly;
use crate::repo::government;
use crate::store::DataStore;

/// Region-wide totals and the latest compliance reports.
#[utoipa::path(
    get,
    path = "/api/government/dashboard",
    responses(
        (status = 200, description = "Government dashboard", body = GovernmentDashboard),
        (status = 403, description = "Not a government user", body = AppError)
    ),
    tag = "government"
)]
pub async fn dashboard(
    State(store): State<Arc<DataStore>>,
    _role: GovernmentOnly,
) -> Result<Json<GovernmentDashboard>, AppError> {
    government::dashboard(&store).map(Json)
}

/// Registered businesses, searched on name and contact person.
#[utoipa::path(
    get,
    path = "/api/government/businesses",
    params(SearchParams),
    responses(
        (status = 200, description = "Businesses", body = Vec<Business>)
    ),
    tag = "government"
)]
pub async fn businesses(
    State(store): State<Arc<DataStore>>,
    _role: GovernmentOnly,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Business>>, AppError> {
    government::businesses(&store, params.search.as_deref()).map(Json)
}

/// Registered providers, searched on company name and contact person.
#[utoipa::path(
    get,
    path = "/api/government/providers",
    params(SearchParams),
    responses(
        (status = 200, description = "Providers", body = Vec<Provider>)
    ),
    tag = "government"
)]
pub async fn providers(
    State(store): State<Arc<DataStore>>,
    _role: GovernmentOnly,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Provider>>, AppError> {
    government::providers(&store, params.search.as_deref()).map(Json)
}

/// Compliance reports, filtered by status and searched on title or provider.
#[utoipa::path(
    get,
    path = "/api/government/compliance",
    params(ReportFilter),
    responses(
        (status = 200, description = "Compliance reports", body = Vec<ComplianceReportView>)
    ),
    tag = "government"
)]
pub async fn compliance(
    State(store): State<Arc<DataStore>>,
    _role: GovernmentOnly,
    Query(filter): Query<ReportFilter>,
) -> Result<Json<Vec<ComplianceReportView>>, AppError> {
    government::compliance(&store, &filter).map(Json)
}

#[utoipa::path(
    get,
    path = "/api/government/analytics",
    responses(
        (status = 200, description = "Regional analytics", body = Analytics)
    ),
    tag = "government"
)]
pub async fn analytics(
    State(store): State<Arc<DataStore>>,
    _role: GovernmentOnly,
) -> Result<Json<Analytics>, AppError> {
    government::analytics(&store).map(Json)
}

/// Pickup activity per provider.
#[utoipa::path(
    get,
    path = "/api/government/reports",
    responses(
        (status = 200, description = "Provider activity", body = Vec<ProviderActivity>)
    ),
    tag = "government"
)]
pub async fn reports(
    State(store): State<Arc<DataStore>>,
    _role: GovernmentOnly,
) -> Result<Json<Vec<ProviderActivity>>, AppError> {
    government::reports(&store).map(Json)
}
