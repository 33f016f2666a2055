use dioxus::prelude::*;
use shared_types::query::ReportFilter;
use shared_types::{
    Analytics, Business, ComplianceReportView, GovernmentDashboard, Provider, ProviderActivity,
};

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_government_dashboard() -> Result<GovernmentDashboard, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::government;
    use shared_types::Role;

    require_role(Role::Government)?;
    government::dashboard(&*store()?).server_fn()
}

/// Business registry, searched on name and contact person.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_businesses(search: Option<String>) -> Result<Vec<Business>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::government;
    use shared_types::Role;

    require_role(Role::Government)?;
    government::businesses(&*store()?, search.as_deref()).server_fn()
}

/// Provider registry, searched on company name and contact person.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_providers(search: Option<String>) -> Result<Vec<Provider>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::government;
    use shared_types::Role;

    require_role(Role::Government)?;
    government::providers(&*store()?, search.as_deref()).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_compliance_reports(
    filter: ReportFilter,
) -> Result<Vec<ComplianceReportView>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::government;
    use shared_types::Role;

    require_role(Role::Government)?;
    government::compliance(&*store()?, &filter).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_analytics() -> Result<Analytics, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::government;
    use shared_types::Role;

    require_role(Role::Government)?;
    government::analytics(&*store()?).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_government_reports() -> Result<Vec<ProviderActivity>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::government;
    use shared_types::Role;

    require_role(Role::Government)?;
    government::reports(&*store()?).server_fn()
}
