use serde::{Deserialize, Serialize};

use crate::compliance::{Analytics, ComplianceReport, ComplianceReportView};
use crate::fleet::{Driver, Vehicle};
use crate::pickup::{PickupDetail, PickupRequest, PickupView};
use crate::waste::{Business, Provider, WasteType};

pub const UNKNOWN_WASTE_TYPE: &str = "Unknown";
pub const UNKNOWN_BUSINESS: &str = "Unknown Business";
pub const UNKNOWN_PROVIDER: &str = "Unknown Provider";

/// The full reference data set the dashboards read from.
///
/// Lookups are linear scans; the collections are small and loaded once.
/// Dangling foreign keys resolve to placeholder names, never to errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Dataset {
    #[serde(default)]
    pub businesses: Vec<Business>,
    #[serde(default)]
    pub providers: Vec<Provider>,
    #[serde(default)]
    pub waste_types: Vec<WasteType>,
    #[serde(default)]
    pub pickups: Vec<PickupRequest>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub compliance_reports: Vec<ComplianceReport>,
    #[serde(default)]
    pub analytics: Analytics,
}

impl Dataset {
    pub fn business(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    pub fn provider(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn waste_type(&self, id: &str) -> Option<&WasteType> {
        self.waste_types.iter().find(|w| w.id == id)
    }

    pub fn pickup(&self, id: &str) -> Option<&PickupRequest> {
        self.pickups.iter().find(|p| p.id == id)
    }

    pub fn waste_type_name(&self, id: &str) -> &str {
        self.waste_type(id)
            .map(|w| w.name.as_str())
            .unwrap_or(UNKNOWN_WASTE_TYPE)
    }

    pub fn business_name(&self, id: &str) -> &str {
        self.business(id)
            .map(|b| b.name.as_str())
            .unwrap_or(UNKNOWN_BUSINESS)
    }

    pub fn provider_name(&self, id: &str) -> &str {
        self.provider(id)
            .map(|p| p.company_name.as_str())
            .unwrap_or(UNKNOWN_PROVIDER)
    }

    /// Resolve a pickup's foreign keys to display names.
    pub fn view(&self, pickup: &PickupRequest) -> PickupView {
        PickupView {
            waste_type_name: self.waste_type_name(&pickup.waste_type_id).to_string(),
            business_name: self.business_name(&pickup.business_id).to_string(),
            provider_name: self.provider_name(&pickup.provider_id).to_string(),
            pickup: pickup.clone(),
        }
    }

    pub fn detail(&self, pickup: &PickupRequest) -> PickupDetail {
        PickupDetail {
            view: self.view(pickup),
            waste_type: self.waste_type(&pickup.waste_type_id).cloned(),
            business: self.business(&pickup.business_id).cloned(),
            provider: self.provider(&pickup.provider_id).cloned(),
        }
    }

    pub fn report_view(&self, report: &ComplianceReport) -> ComplianceReportView {
        ComplianceReportView {
            provider_name: self.provider_name(&report.provider_id).to_string(),
            report: report.clone(),
        }
    }
}
