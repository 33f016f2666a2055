use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;
use crate::waste::{Business, Provider, WasteType};

/// Lifecycle of a pickup request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl PickupStatus {
    pub const ALL: [PickupStatus; 4] = [
        PickupStatus::Scheduled,
        PickupStatus::InProgress,
        PickupStatus::Completed,
        PickupStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PickupStatus::Scheduled => "scheduled",
            PickupStatus::InProgress => "in_progress",
            PickupStatus::Completed => "completed",
            PickupStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PickupStatus::Scheduled => "Scheduled",
            PickupStatus::InProgress => "In Progress",
            PickupStatus::Completed => "Completed",
            PickupStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Only a scheduled pickup can still be cancelled.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, PickupStatus::Scheduled)
    }

    /// Scheduled or underway.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, PickupStatus::Scheduled | PickupStatus::InProgress)
    }
}

impl fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
        }
    }
}

/// Live dispatch details for an assigned pickup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TrackingDetails {
    pub assigned_vehicle: String,
    pub assigned_driver: String,
    pub estimated_arrival: Option<DateTime<Utc>>,
    pub actual_pickup_time: Option<DateTime<Utc>>,
    pub disposal_completion_time: Option<DateTime<Utc>>,
    pub current_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PickupRequest {
    pub id: String,
    pub business_id: String,
    pub provider_id: String,
    pub waste_type_id: String,
    pub status: PickupStatus,
    pub scheduled_date: DateTime<Utc>,
    pub volume_kg: f64,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pickup_address: String,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub tracking: Option<TrackingDetails>,
}

/// Pickup row with its foreign keys resolved to display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PickupView {
    pub pickup: PickupRequest,
    pub waste_type_name: String,
    pub business_name: String,
    pub provider_name: String,
}

/// Everything the pickup detail page shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PickupDetail {
    pub view: PickupView,
    pub waste_type: Option<WasteType>,
    pub business: Option<Business>,
    pub provider: Option<Provider>,
}

/// New pickup submitted by a business.
///
/// `business_id` is never taken from the client; the server derives it
/// from the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreatePickupRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please select a waste type"))
    )]
    pub waste_type_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1.0, message = "Volume must be at least 1 kg"))
    )]
    pub volume_kg: f64,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please select a provider"))
    )]
    pub provider_id: String,
    pub scheduled_date: NaiveDate,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Pickup address is required"))
    )]
    pub pickup_address: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "City is required"))
    )]
    pub city: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "State is required"))
    )]
    pub state: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Postal code is required"))
    )]
    pub postal_code: String,
    #[serde(default)]
    pub notes: String,
}

impl CreatePickupRequest {
    /// Scheduled date must be tomorrow or later.
    pub fn check_schedule(&self, today: NaiveDate) -> Result<(), AppError> {
        if self.scheduled_date <= today {
            return Err(AppError::field(
                "scheduled_date",
                "Scheduled date must be in the future",
            ));
        }
        Ok(())
    }

    /// Address line stored on the pickup.
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}",
            self.pickup_address.trim(),
            self.city.trim(),
            self.state.trim()
        )
    }

    /// Pickups are scheduled at the start of the chosen day.
    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Build the stored record for a new pickup.
    pub fn into_pickup(
        self,
        id: String,
        business_id: String,
        now: DateTime<Utc>,
    ) -> PickupRequest {
        let scheduled_date = self.scheduled_at();
        let pickup_address = self.full_address();
        PickupRequest {
            id,
            business_id,
            provider_id: self.provider_id,
            waste_type_id: self.waste_type_id,
            status: PickupStatus::Scheduled,
            scheduled_date,
            volume_kg: self.volume_kg,
            notes: self.notes.trim().to_string(),
            created_at: now,
            updated_at: now,
            pickup_address,
            payment_status: PaymentStatus::Pending,
            total_amount: None,
            tracking: None,
        }
    }
}


/// Choices and defaults for the request-pickup form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PickupFormOptions {
    pub waste_types: Vec<WasteType>,
    pub providers: Vec<Provider>,
    /// Address fields pre-filled from the business profile; the date
    /// defaults to the first day that passes `check_schedule`.
    pub prefill: CreatePickupRequest,
}

impl PickupFormOptions {
    pub fn new(
        waste_types: Vec<WasteType>,
        providers: Vec<Provider>,
        business: Option<&Business>,
        today: NaiveDate,
    ) -> Self {
        let mut prefill = CreatePickupRequest {
            scheduled_date: today.succ_opt().unwrap_or(today),
            ..Default::default()
        };
        if let Some(business) = business {
            prefill.pickup_address = business.address.clone();
            prefill.city = business.city.clone();
            prefill.state = business.state.clone();
            prefill.postal_code = business.postal_code.clone();
        }
        Self {
            waste_types,
            providers,
            prefill,
        }
    }
}
