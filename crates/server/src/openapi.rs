use axum::Router;
use shared_types::{
    // Session
    AppError, AppErrorKind, AuthResponse, LoginRequest, MessageResponse, Role, SessionUser,
    // Reference data
    Business, Provider, WasteProfile, WasteProfileView, WasteType,
    // Pickups
    CreatePickupRequest, PaymentStatus, PickupDetail, PickupFormOptions, PickupRequest,
    PickupStatus, PickupView, TrackingDetails,
    // Fleet and routes
    Driver, DriverStatus, Fleet, RouteStatus, RouteView, TrackingOverview, Vehicle, VehicleStatus,
    // Compliance and analytics
    Analytics, ComplianceReport, ComplianceReportView, MonthlyCollection, ReportStatus,
    ServicePerformance, WasteByType,
    // Dashboards and reports
    BusinessDashboard, BusinessStats, GovernmentDashboard, GovernmentStats, ProviderActivity,
    CustomerSummary, ProviderDashboard, ProviderStats, StatusBreakdown, VolumeByWasteType,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::state::AppState;
use crate::store::DataStore;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::auth::login,
        rest::auth::logout,
        rest::auth::me,
        rest::business::dashboard,
        rest::business::list_pickups,
        rest::business::create_pickup,
        rest::business::get_pickup,
        rest::business::cancel_pickup,
        rest::business::pickup_form,
        rest::business::waste_profiles,
        rest::business::reports,
        rest::business::profile,
        rest::provider::dashboard,
        rest::provider::list_pickups,
        rest::provider::fleet,
        rest::provider::customers,
        rest::provider::tracking,
        rest::provider::compliance,
        rest::provider::reports,
        rest::provider::profile,
        rest::government::dashboard,
        rest::government::businesses,
        rest::government::providers,
        rest::government::compliance,
        rest::government::analytics,
        rest::government::reports,
        rest::reference::waste_types,
        rest::reference::providers,
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind, AuthResponse, LoginRequest, MessageResponse, Role, SessionUser,
        Business, Provider, WasteProfile, WasteProfileView, WasteType,
        CreatePickupRequest, PaymentStatus, PickupDetail, PickupFormOptions, PickupRequest,
        PickupStatus, PickupView, TrackingDetails,
        Driver, DriverStatus, Fleet, RouteStatus, RouteView, TrackingOverview, Vehicle,
        VehicleStatus,
        Analytics, ComplianceReport, ComplianceReportView, MonthlyCollection, ReportStatus,
        ServicePerformance, WasteByType,
        BusinessDashboard, BusinessStats, GovernmentDashboard, GovernmentStats, ProviderActivity,
        CustomerSummary, ProviderDashboard, ProviderStats, StatusBreakdown, VolumeByWasteType,
        health::HealthResponse,
    )),
    tags(
        (name = "auth", description = "Session login, logout and identity"),
        (name = "business", description = "Pickup requests and reports for business users"),
        (name = "provider", description = "Assigned pickups, fleet and compliance for waste providers"),
        (name = "government", description = "Registries, compliance oversight and analytics"),
        (name = "reference", description = "Waste types and providers"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "WasteTrack API",
        description = "Waste pickup tracking for businesses, providers and government",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`, the REST API
/// at `/api/*` and the health check at `/health`.
pub fn api_router(store: Arc<DataStore>) -> Router {
    let state = AppState::new(store);

    Router::new()
        .merge(rest::rest_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_role_surface() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/login",
            "/api/business/pickups/{id}/cancel",
            "/api/provider/fleet",
            "/api/provider/customers",
            "/api/provider/tracking",
            "/api/government/analytics",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
