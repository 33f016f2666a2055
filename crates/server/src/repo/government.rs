use shared_types::query::{self, ReportFilter};
use shared_types::{
    Analytics, AppError, Business, ComplianceReportView, GovernmentDashboard, Provider,
    ProviderActivity,
};

use crate::store::DataStore;

// Government users see the whole region; nothing here is scoped to a
// linked entity.

pub fn dashboard(store: &DataStore) -> Result<GovernmentDashboard, AppError> {
    store.read(query::government_dashboard)
}

pub fn businesses(store: &DataStore, search: Option<&str>) -> Result<Vec<Business>, AppError> {
    store.read(|data| {
        query::search_businesses(data, search)
            .into_iter()
            .cloned()
            .collect()
    })
}

pub fn providers(store: &DataStore, search: Option<&str>) -> Result<Vec<Provider>, AppError> {
    store.read(|data| {
        query::search_providers(data, search)
            .into_iter()
            .cloned()
            .collect()
    })
}

pub fn compliance(
    store: &DataStore,
    filter: &ReportFilter,
) -> Result<Vec<ComplianceReportView>, AppError> {
    store.read(|data| query::filter_reports(data, filter))
}

pub fn analytics(store: &DataStore) -> Result<Analytics, AppError> {
    store.read(|data| data.analytics.clone())
}

pub fn reports(store: &DataStore) -> Result<Vec<ProviderActivity>, AppError> {
    store.read(query::provider_activity)
}
