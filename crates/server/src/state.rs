use axum::extract::FromRef;
use shared_types::AppError;
use std::sync::{Arc, OnceLock};

use crate::store::DataStore;

static STORE: OnceLock<Arc<DataStore>> = OnceLock::new();

/// Shared state for the REST router.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Arc<DataStore>,
}

impl AppState {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

/// Install the process-wide store used by server functions. Returns the
/// store that ends up installed; a second call keeps the first store.
pub fn init_store(store: Arc<DataStore>) -> Arc<DataStore> {
    STORE.get_or_init(|| store).clone()
}

/// Process-wide store, built from the seed and `config.toml` on first use.
pub fn store() -> Result<Arc<DataStore>, AppError> {
    if let Some(store) = STORE.get() {
        return Ok(store.clone());
    }
    let store = Arc::new(DataStore::from_seed(crate::config::app_config().clone())?);
    Ok(init_store(store))
}
