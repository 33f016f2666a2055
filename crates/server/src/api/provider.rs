use dioxus::prelude::*;
use shared_types::query::PickupFilter;
use shared_types::{
    ComplianceReportView, CustomerSummary, Fleet, PickupView, Provider, ProviderDashboard,
    StatusBreakdown, TrackingOverview,
};

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_provider_dashboard() -> Result<ProviderDashboard, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::provider;
    use shared_types::Role;

    let user = require_role(Role::Provider)?;
    provider::dashboard(&*store()?, &user).server_fn()
}

/// Pickups assigned to the caller's company.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_provider_pickups(filter: PickupFilter) -> Result<Vec<PickupView>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::provider;
    use shared_types::Role;

    let user = require_role(Role::Provider)?;
    provider::pickup_requests(&*store()?, &user, &filter).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_fleet() -> Result<Fleet, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::provider;
    use shared_types::Role;

    let user = require_role(Role::Provider)?;
    provider::fleet(&*store()?, &user).server_fn()
}

/// Businesses served by the caller's company.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_provider_customers(
    search: Option<String>,
) -> Result<Vec<CustomerSummary>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::provider;
    use shared_types::Role;

    let user = require_role(Role::Provider)?;
    provider::customers(&*store()?, &user, search.as_deref()).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_tracking() -> Result<TrackingOverview, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::provider;
    use shared_types::Role;

    let user = require_role(Role::Provider)?;
    provider::tracking(&*store()?, &user).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_provider_compliance() -> Result<Vec<ComplianceReportView>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::provider;
    use shared_types::Role;

    let user = require_role(Role::Provider)?;
    provider::compliance(&*store()?, &user).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_provider_reports() -> Result<Vec<StatusBreakdown>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::provider;
    use shared_types::Role;

    let user = require_role(Role::Provider)?;
    provider::reports(&*store()?, &user).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_provider_profile() -> Result<Provider, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::provider;
    use shared_types::Role;

    let user = require_role(Role::Provider)?;
    provider::profile(&*store()?, &user).server_fn()
}
