use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

impl VehicleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Maintenance => "Maintenance",
            VehicleStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    OnDuty,
    OffDuty,
    OnLeave,
}

impl DriverStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DriverStatus::OnDuty => "On Duty",
            DriverStatus::OffDuty => "Off Duty",
            DriverStatus::OnLeave => "On Leave",
        }
    }
}

/// A collection vehicle owned by a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Vehicle {
    pub id: String,
    pub provider_id: String,
    pub vehicle_number: String,
    pub vehicle_type: String,
    pub capacity: String,
    pub license_plate: String,
    pub last_maintenance: NaiveDate,
    pub status: VehicleStatus,
}

/// A driver employed by a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Driver {
    pub id: String,
    pub provider_id: String,
    pub name: String,
    pub license_number: String,
    pub phone: String,
    pub email: String,
    pub status: DriverStatus,
}

/// Vehicles and drivers of one provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Fleet {
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<Driver>,
}

impl Fleet {
    pub fn vehicles_in_maintenance(&self) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Maintenance)
            .count()
    }

    pub fn drivers_on_duty(&self) -> usize {
        self.drivers
            .iter()
            .filter(|d| d.status == DriverStatus::OnDuty)
            .count()
    }
}

/// Progress of one driver/vehicle route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl RouteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::Scheduled => "Scheduled",
            RouteStatus::InProgress => "In Progress",
            RouteStatus::Completed => "Completed",
        }
    }
}

/// Pickups dispatched to one driver and vehicle pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RouteView {
    pub driver: String,
    pub vehicle: String,
    /// `None` when the driver is not on the provider's roster.
    pub driver_status: Option<DriverStatus>,
    pub vehicle_status: Option<VehicleStatus>,
    pub pickups_planned: usize,
    pub pickups_completed: usize,
    /// Earliest estimated arrival among the pickups still open.
    pub next_arrival: Option<DateTime<Utc>>,
    pub status: RouteStatus,
}

/// Routes & tracking page for one provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TrackingOverview {
    pub routes: Vec<RouteView>,
    pub active_routes: usize,
    pub vehicles: usize,
    pub vehicles_active: usize,
    pub drivers_on_duty: usize,
}
