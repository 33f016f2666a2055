//! Process-wide in-memory data store.
//!
//! Holds the data set behind a read/write lock plus the login accounts.
//! Lock guards are never held across an `.await`; the simulated latencies
//! run before the lock is taken.

use chrono::Utc;
use shared_types::{
    AppConfig, AppError, CreatePickupRequest, Dataset, PickupRequest, PickupStatus, Role,
    SessionUser,
};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use crate::auth::password;
use crate::error_convert::ValidateRequest;
use crate::seed::{self, SeedFile};

/// A login account with its argon2 hash.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub role: Role,
    password_hash: String,
}

impl UserAccount {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug)]
pub struct DataStore {
    data: RwLock<Dataset>,
    accounts: Vec<UserAccount>,
    config: AppConfig,
}

fn poisoned<E>(_: E) -> AppError {
    tracing::error!("data store lock poisoned");
    AppError::internal("Data store unavailable")
}

async fn simulate_latency(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

impl DataStore {
    /// Build a store from parsed seed data, hashing every seed password.
    pub fn new(seed: SeedFile, config: AppConfig) -> Result<Self, AppError> {
        let accounts = seed
            .users
            .into_iter()
            .map(|user| {
                let password_hash = password::hash_password(&user.password)
                    .map_err(|e| AppError::internal(format!("Failed to hash seed password: {e}")))?;
                Ok(UserAccount {
                    id: user.id,
                    email: user.email,
                    role: user.role,
                    password_hash,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        tracing::info!(
            accounts = accounts.len(),
            businesses = seed.dataset.businesses.len(),
            providers = seed.dataset.providers.len(),
            pickups = seed.dataset.pickups.len(),
            "data store loaded"
        );

        Ok(Self {
            data: RwLock::new(seed.dataset),
            accounts,
            config,
        })
    }

    /// Build a store from the built-in seed.
    pub fn from_seed(config: AppConfig) -> Result<Self, AppError> {
        Self::new(seed::load_seed()?, config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run `f` against the current data set under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&Dataset) -> T) -> Result<T, AppError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(f(&data))
    }

    pub fn snapshot(&self) -> Result<Dataset, AppError> {
        self.read(Dataset::clone)
    }

    fn write<T>(&self, f: impl FnOnce(&mut Dataset) -> T) -> Result<T, AppError> {
        let mut data = self.data.write().map_err(poisoned)?;
        Ok(f(&mut data))
    }

    pub fn account(&self, id: &str) -> Option<&UserAccount> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Exact match of email and password against the account table, after
    /// the configured login latency.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<SessionUser, AppError> {
        simulate_latency(self.config.demo.login_delay_ms).await;

        let Some(account) = self.accounts.iter().find(|a| a.email == email) else {
            tracing::info!(email, "login rejected: unknown email");
            return Err(AppError::invalid_credentials());
        };

        let valid = password::verify_password(password, &account.password_hash)
            .map_err(|e| AppError::internal(e.to_string()))?;
        if !valid {
            tracing::info!(email, "login rejected: wrong password");
            return Err(AppError::invalid_credentials());
        }

        tracing::info!(user_id = %account.id, role = %account.role, "login accepted");
        Ok(account.session_user())
    }

    /// Validate and record a new pickup for `business_id`.
    ///
    /// Field errors from the form, the schedule date and the referenced
    /// waste type and provider are reported together.
    pub async fn create_pickup(
        &self,
        business_id: &str,
        req: CreatePickupRequest,
    ) -> Result<PickupRequest, AppError> {
        let mut field_errors: HashMap<String, String> = match req.validate_request() {
            Ok(()) => HashMap::new(),
            Err(e) => e.field_errors,
        };
        if let Err(e) = req.check_schedule(Utc::now().date_naive()) {
            field_errors.extend(e.field_errors);
        }
        let (waste_type_known, provider_known) = self.read(|data| {
            (
                data.waste_type(&req.waste_type_id).is_some(),
                data.provider(&req.provider_id).is_some(),
            )
        })?;
        if !req.waste_type_id.is_empty() && !waste_type_known {
            field_errors.insert("waste_type_id".into(), "Unknown waste type".into());
        }
        if !req.provider_id.is_empty() && !provider_known {
            field_errors.insert("provider_id".into(), "Unknown provider".into());
        }
        if !field_errors.is_empty() {
            return Err(AppError::validation("Validation failed", field_errors));
        }

        simulate_latency(self.config.demo.submit_delay_ms).await;

        let now = Utc::now();
        let pickup = req.into_pickup(uuid::Uuid::new_v4().to_string(), business_id.to_string(), now);

        if self.config.features.persist_mutations {
            self.write(|data| data.pickups.push(pickup.clone()))?;
        }
        tracing::info!(
            pickup_id = %pickup.id,
            business_id,
            persisted = self.config.features.persist_mutations,
            "pickup requested"
        );
        Ok(pickup)
    }

    /// Cancel a scheduled pickup owned by `business_id`.
    pub async fn cancel_pickup(
        &self,
        business_id: &str,
        pickup_id: &str,
    ) -> Result<PickupRequest, AppError> {
        let cancelled = self.read(|data| cancelled_copy(data, business_id, pickup_id))??;

        simulate_latency(self.config.demo.cancel_delay_ms).await;

        if !self.config.features.persist_mutations {
            return Ok(cancelled);
        }

        // Re-check under the write lock; the pickup may have changed meanwhile.
        let stored = self.write(|data| {
            let cancelled = cancelled_copy(data, business_id, pickup_id)?;
            if let Some(slot) = data.pickups.iter_mut().find(|p| p.id == pickup_id) {
                *slot = cancelled.clone();
            }
            Ok::<_, AppError>(cancelled)
        })??;

        tracing::info!(pickup_id, business_id, "pickup cancelled");
        Ok(stored)
    }
}

fn cancelled_copy(
    data: &Dataset,
    business_id: &str,
    pickup_id: &str,
) -> Result<PickupRequest, AppError> {
    let pickup = data
        .pickup(pickup_id)
        .ok_or_else(|| AppError::not_found("Pickup not found"))?;
    if pickup.business_id != business_id {
        return Err(AppError::forbidden("This pickup belongs to another business"));
    }
    if !pickup.status.is_cancellable() {
        return Err(AppError::bad_request("Only scheduled pickups can be cancelled"));
    }
    let mut cancelled = pickup.clone();
    cancelled.status = PickupStatus::Cancelled;
    cancelled.updated_at = Utc::now();
    Ok(cancelled)
}
