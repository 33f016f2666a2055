use dioxus::prelude::*;
use shared_types::query::PickupFilter;
use shared_types::{
    Business, BusinessDashboard, CreatePickupRequest, PickupDetail, PickupFormOptions,
    PickupRequest, PickupView, VolumeByWasteType, WasteProfileView,
};

/// Stats and recent pickups for the caller's business.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_business_dashboard() -> Result<BusinessDashboard, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::business;
    use shared_types::Role;

    let user = require_role(Role::Business)?;
    business::dashboard(&*store()?, &user).server_fn()
}

/// The caller's pickups, filtered by status and search term.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_business_pickups(filter: PickupFilter) -> Result<Vec<PickupView>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::business;
    use shared_types::Role;

    let user = require_role(Role::Business)?;
    business::pickups(&*store()?, &user, &filter).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_pickup_detail(pickup_id: String) -> Result<PickupDetail, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::business;
    use shared_types::Role;

    let user = require_role(Role::Business)?;
    business::pickup_detail(&*store()?, &user, &pickup_id).server_fn()
}

/// Cancel one of the caller's scheduled pickups.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn cancel_pickup(pickup_id: String) -> Result<PickupRequest, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::business;
    use shared_types::Role;

    let user = require_role(Role::Business)?;
    business::cancel_pickup(&*store()?, &user, &pickup_id)
        .await
        .server_fn()
}

/// Waste types, providers and address defaults for the request form.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_pickup_form() -> Result<PickupFormOptions, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::business;
    use shared_types::Role;

    let user = require_role(Role::Business)?;
    business::request_form(&*store()?, &user).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn create_pickup(req: CreatePickupRequest) -> Result<PickupRequest, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::business;
    use shared_types::Role;

    let user = require_role(Role::Business)?;
    business::create_pickup(&*store()?, &user, req)
        .await
        .server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_waste_profiles() -> Result<Vec<WasteProfileView>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::business;
    use shared_types::Role;

    let user = require_role(Role::Business)?;
    business::waste_profiles(&*store()?, &user).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_business_reports() -> Result<Vec<VolumeByWasteType>, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::business;
    use shared_types::Role;

    let user = require_role(Role::Business)?;
    business::reports(&*store()?, &user).server_fn()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_business_profile() -> Result<Business, ServerFnError> {
    use crate::api::auth::{require_role, store};
    use crate::error_convert::ServerResultExt;
    use crate::repo::business;
    use shared_types::Role;

    let user = require_role(Role::Business)?;
    business::profile(&*store()?, &user).server_fn()
}
