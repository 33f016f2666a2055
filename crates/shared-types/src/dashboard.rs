//! Read models for the role dashboards and report pages.

use serde::{Deserialize, Serialize};

use crate::compliance::ComplianceReportView;
use crate::pickup::{PickupStatus, PickupView};
use crate::waste::{Business, Provider};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BusinessStats {
    pub completed: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    /// Sum of completed pickup volumes.
    pub total_waste_disposed_kg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BusinessDashboard {
    pub business: Business,
    pub stats: BusinessStats,
    pub recent_pickups: Vec<PickupView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProviderStats {
    pub total_pickups: usize,
    pub completed: usize,
    /// Pickups still in `scheduled`.
    pub pending: usize,
    pub in_progress: usize,
    /// Completed plus in-progress volumes.
    pub total_waste_collected_kg: f64,
    pub businesses_served: usize,
    pub vehicles: usize,
    pub drivers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProviderDashboard {
    pub provider: Provider,
    pub stats: ProviderStats,
    pub upcoming_pickups: Vec<PickupView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GovernmentStats {
    pub total_businesses: usize,
    pub total_providers: usize,
    pub total_pickups: usize,
    /// Reports still `under_review`.
    pub pending_reports: usize,
    pub compliance_rate: f64,
    pub total_waste_collected: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GovernmentDashboard {
    pub stats: GovernmentStats,
    pub recent_reports: Vec<ComplianceReportView>,
}

/// Business report row: volume per waste type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VolumeByWasteType {
    pub waste_type_name: String,
    pub pickups: usize,
    pub volume_kg: f64,
}

/// Provider report row: pickups per status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatusBreakdown {
    pub status: PickupStatus,
    pub pickups: usize,
    pub volume_kg: f64,
}

/// Government report row: activity per provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProviderActivity {
    pub provider_id: String,
    pub provider_name: String,
    pub pickups: usize,
    pub completed: usize,
    pub volume_kg: f64,
}

/// A business served by a provider, with totals over that provider's pickups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CustomerSummary {
    pub business: Business,
    /// Every pickup, cancelled ones included.
    pub total_pickups: usize,
    /// Volume of pickups that were not cancelled.
    pub waste_volume_kg: f64,
}
