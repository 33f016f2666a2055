use chrono::Utc;
use shared_types::query::{self, Perspective, PickupFilter};
use shared_types::{
    AppError, Business, BusinessDashboard, CreatePickupRequest, PickupDetail, PickupFormOptions,
    PickupRequest, PickupView, SessionUser, VolumeByWasteType, WasteProfileView,
};

use super::{business_id, linked_business};
use crate::store::DataStore;

/// Welcome card, stats and most recent pickups.
pub fn dashboard(store: &DataStore, user: &SessionUser) -> Result<BusinessDashboard, AppError> {
    store.read(|data| {
        let business = linked_business(data, user)?;
        Ok(query::business_dashboard(data, &business))
    })?
}

pub fn pickups(
    store: &DataStore,
    user: &SessionUser,
    filter: &PickupFilter,
) -> Result<Vec<PickupView>, AppError> {
    store.read(|data| match query::linked_business(data, &user.id) {
        Some(business) => query::filter_pickups(
            data,
            query::pickups_for_business(data, &business.id),
            filter,
            Perspective::Business,
        ),
        None => Vec::new(),
    })
}

/// A pickup with every reference resolved. Only the owning business may
/// view it.
pub fn pickup_detail(
    store: &DataStore,
    user: &SessionUser,
    pickup_id: &str,
) -> Result<PickupDetail, AppError> {
    store.read(|data| {
        let pickup = data
            .pickup(pickup_id)
            .ok_or_else(|| AppError::not_found("Pickup not found"))?;
        let owner = query::linked_business(data, &user.id).map(|b| b.id.as_str());
        if owner != Some(pickup.business_id.as_str()) {
            return Err(AppError::forbidden("This pickup belongs to another business"));
        }
        Ok(data.detail(pickup))
    })?
}

pub async fn cancel_pickup(
    store: &DataStore,
    user: &SessionUser,
    pickup_id: &str,
) -> Result<PickupRequest, AppError> {
    let Some(business_id) = business_id(store, user)? else {
        return Err(AppError::forbidden("No business is linked to this account"));
    };
    store.cancel_pickup(&business_id, pickup_id).await
}

pub fn request_form(store: &DataStore, user: &SessionUser) -> Result<PickupFormOptions, AppError> {
    store.read(|data| {
        PickupFormOptions::new(
            data.waste_types.clone(),
            data.providers.clone(),
            query::linked_business(data, &user.id),
            Utc::now().date_naive(),
        )
    })
}

pub async fn create_pickup(
    store: &DataStore,
    user: &SessionUser,
    req: CreatePickupRequest,
) -> Result<PickupRequest, AppError> {
    let Some(business_id) = business_id(store, user)? else {
        return Err(AppError::not_found("No business is linked to this account"));
    };
    store.create_pickup(&business_id, req).await
}

pub fn waste_profiles(
    store: &DataStore,
    user: &SessionUser,
) -> Result<Vec<WasteProfileView>, AppError> {
    store.read(|data| {
        query::linked_business(data, &user.id)
            .map(|business| query::waste_profiles(data, business))
            .unwrap_or_default()
    })
}

/// Volume per waste type over the business's pickups.
pub fn reports(store: &DataStore, user: &SessionUser) -> Result<Vec<VolumeByWasteType>, AppError> {
    store.read(|data| match query::linked_business(data, &user.id) {
        Some(business) => {
            query::volume_by_waste_type(data, query::pickups_for_business(data, &business.id))
        }
        None => Vec::new(),
    })
}

pub fn profile(store: &DataStore, user: &SessionUser) -> Result<Business, AppError> {
    store.read(|data| linked_business(data, user))?
}
