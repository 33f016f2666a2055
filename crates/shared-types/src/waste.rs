use serde::{Deserialize, Serialize};

/// A category of waste, e.g. plastic or medical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WasteType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub hazardous: bool,
}

impl WasteType {
    /// Option label used by the request form.
    pub fn select_label(&self) -> String {
        if self.hazardous {
            format!("{} (Hazardous)", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Expected recurring volume of one waste type for a business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WasteProfile {
    pub id: String,
    pub waste_type_id: String,
    pub estimated_volume_kg: f64,
    #[serde(default)]
    pub notes: String,
}

/// A waste-producing business. `user_id` links it to a login; `None`
/// means the record has not been claimed by any account yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Business {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    pub business_type: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub verified: bool,
    #[serde(default)]
    pub waste_profiles: Vec<WasteProfile>,
}

impl Business {
    /// Single-line address as printed on pickup requests.
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.city, self.state)
    }
}

/// A licensed waste collection company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Provider {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub company_name: String,
    pub license_number: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub service_radius_km: f64,
    pub verified: bool,
}

/// Waste profile joined with its waste type for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WasteProfileView {
    pub profile: WasteProfile,
    pub waste_type_name: String,
    pub hazardous: bool,
}
