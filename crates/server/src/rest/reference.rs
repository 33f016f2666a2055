use axum::{extract::State, Json};
use shared_types::{AppError, Provider, WasteType};
use std::sync::Arc;

use crate::auth::extractors::AuthRequired;
use crate::repo::reference;
use crate::store::DataStore;

/// All waste types. Any signed-in role may read reference data.
#[utoipa::path(
    get,
    path = "/api/waste-types",
    responses(
        (status = 200, description = "Waste types", body = Vec<WasteType>),
        (status = 401, description = "No session", body = AppError)
    ),
    tag = "reference"
)]
pub async fn waste_types(
    State(store): State<Arc<DataStore>>,
    _auth: AuthRequired,
) -> Result<Json<Vec<WasteType>>, AppError> {
    reference::waste_types(&store).map(Json)
}

/// All waste providers.
#[utoipa::path(
    get,
    path = "/api/providers",
    responses(
        (status = 200, description = "Providers", body = Vec<Provider>),
        (status = 401, description = "No session", body = AppError)
    ),
    tag = "reference"
)]
pub async fn providers(
    State(store): State<Arc<DataStore>>,
    _auth: AuthRequired,
) -> Result<Json<Vec<Provider>>, AppError> {
    reference::providers(&store).map(Json)
}
