use shared_types::query::{self, Perspective, PickupFilter};
use shared_types::{
    AppError, ComplianceReportView, CustomerSummary, Fleet, PickupView, Provider,
    ProviderDashboard, SessionUser, StatusBreakdown, TrackingOverview,
};

use super::linked_provider;
use crate::store::DataStore;

pub fn dashboard(store: &DataStore, user: &SessionUser) -> Result<ProviderDashboard, AppError> {
    store.read(|data| {
        let provider = linked_provider(data, user)?;
        Ok(query::provider_dashboard(data, &provider))
    })?
}

/// Pickups assigned to the provider, searched by business name among others.
pub fn pickup_requests(
    store: &DataStore,
    user: &SessionUser,
    filter: &PickupFilter,
) -> Result<Vec<PickupView>, AppError> {
    store.read(|data| match query::linked_provider(data, &user.id) {
        Some(provider) => query::filter_pickups(
            data,
            query::pickups_for_provider(data, &provider.id),
            filter,
            Perspective::Provider,
        ),
        None => Vec::new(),
    })
}

pub fn fleet(store: &DataStore, user: &SessionUser) -> Result<Fleet, AppError> {
    store.read(|data| {
        query::linked_provider(data, &user.id)
            .map(|provider| query::fleet_for_provider(data, &provider.id))
            .unwrap_or_default()
    })
}

/// Businesses the provider has served, searched by name or contact person.
pub fn customers(
    store: &DataStore,
    user: &SessionUser,
    search: Option<&str>,
) -> Result<Vec<CustomerSummary>, AppError> {
    store.read(|data| {
        query::linked_provider(data, &user.id)
            .map(|provider| query::customers_for_provider(data, &provider.id, search))
            .unwrap_or_default()
    })
}

pub fn tracking(store: &DataStore, user: &SessionUser) -> Result<TrackingOverview, AppError> {
    store.read(|data| {
        query::linked_provider(data, &user.id)
            .map(|provider| query::tracking_for_provider(data, &provider.id))
            .unwrap_or_default()
    })
}

pub fn compliance(
    store: &DataStore,
    user: &SessionUser,
) -> Result<Vec<ComplianceReportView>, AppError> {
    store.read(|data| {
        query::linked_provider(data, &user.id)
            .map(|provider| query::reports_for_provider(data, &provider.id))
            .unwrap_or_default()
    })
}

/// Pickup count and volume per status.
pub fn reports(store: &DataStore, user: &SessionUser) -> Result<Vec<StatusBreakdown>, AppError> {
    store.read(|data| {
        let pickups = query::linked_provider(data, &user.id)
            .map(|provider| query::pickups_for_provider(data, &provider.id))
            .unwrap_or_default();
        query::status_breakdown(pickups)
    })
}

pub fn profile(store: &DataStore, user: &SessionUser) -> Result<Provider, AppError> {
    store.read(|data| linked_provider(data, user))?
}
