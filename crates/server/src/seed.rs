//! Seed data compiled into the binary.

use serde::Deserialize;
use shared_types::{AppError, Dataset, Role};

const SEED_JSON: &str = include_str!("../seed/dataset.json");

/// A login account as it appears in the seed file. The plaintext password
/// is hashed by the store and never leaves this crate.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    pub users: Vec<SeedUser>,
    #[serde(flatten)]
    pub dataset: Dataset,
}

pub fn parse_seed(json: &str) -> Result<SeedFile, AppError> {
    serde_json::from_str(json).map_err(|e| AppError::internal(format!("Invalid seed data: {e}")))
}

/// The built-in demo data set.
pub fn load_seed() -> Result<SeedFile, AppError> {
    parse_seed(SEED_JSON)
}
