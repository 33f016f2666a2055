use shared_types::{AppError, Provider, WasteType};

use crate::store::DataStore;

pub fn waste_types(store: &DataStore) -> Result<Vec<WasteType>, AppError> {
    store.read(|data| data.waste_types.clone())
}

pub fn providers(store: &DataStore) -> Result<Vec<Provider>, AppError> {
    store.read(|data| data.providers.clone())
}
