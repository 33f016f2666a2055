//! Read and write operations over the [`DataStore`], scoped to the session
//! user. Shared by the server functions and the REST handlers.
//!
//! List operations for a user without a linked entity return empty lists;
//! single-record operations (dashboard, profile, mutations) return NotFound.

pub mod business;
pub mod government;
pub mod provider;
pub mod reference;

use shared_types::{query, AppError, Business, Dataset, Provider, SessionUser};

use crate::store::DataStore;

pub(crate) fn linked_business(data: &Dataset, user: &SessionUser) -> Result<Business, AppError> {
    query::linked_business(data, &user.id)
        .cloned()
        .ok_or_else(|| AppError::not_found("No business is linked to this account"))
}

pub(crate) fn linked_provider(data: &Dataset, user: &SessionUser) -> Result<Provider, AppError> {
    query::linked_provider(data, &user.id)
        .cloned()
        .ok_or_else(|| AppError::not_found("No provider is linked to this account"))
}

/// Id of the business linked to `user`, if any.
pub(crate) fn business_id(store: &DataStore, user: &SessionUser) -> Result<Option<String>, AppError> {
    store.read(|data| query::linked_business(data, &user.id).map(|b| b.id.clone()))
}

#[cfg(test)]
pub(crate) mod testing {
    use shared_types::{AppConfig, DemoConfig, Role, SessionUser};

    use crate::store::DataStore;

    pub const BUSINESS_USER: &str = "bd8f33c5-9e45-4b9e-a91a-4ac5e2b53c5f";
    pub const PROVIDER_USER: &str = "7e9b1b9e-9b1b-4b9e-9b1b-9b1b9b1b9b1b";
    pub const GOVERNMENT_USER: &str = "6e1c7d4e-8f2a-4b9c-9d1e-3f5a2b1c7d4e";

    pub fn store() -> DataStore {
        DataStore::from_seed(AppConfig {
            demo: DemoConfig::instant(),
            ..AppConfig::default()
        })
        .unwrap()
    }

    pub fn user(id: &str, role: Role) -> SessionUser {
        SessionUser {
            id: id.to_string(),
            email: format!("{}@example.com", role.as_str()),
            role,
        }
    }

    pub fn business_user() -> SessionUser {
        user(BUSINESS_USER, Role::Business)
    }

    pub fn provider_user() -> SessionUser {
        user(PROVIDER_USER, Role::Provider)
    }

    pub fn government_user() -> SessionUser {
        user(GOVERNMENT_USER, Role::Government)
    }

    /// A role-correct user that owns nothing in the seed.
    pub fn unlinked(role: Role) -> SessionUser {
        user("00000000-0000-4000-8000-000000000000", role)
    }
}
