use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Submitted,
    UnderReview,
    Approved,
    Rejected,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Submitted,
        ReportStatus::UnderReview,
        ReportStatus::Approved,
        ReportStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "submitted",
            ReportStatus::UnderReview => "under_review",
            ReportStatus::Approved => "approved",
            ReportStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "Submitted",
            ReportStatus::UnderReview => "Under Review",
            ReportStatus::Approved => "Approved",
            ReportStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// Periodic disposal report filed by a provider with the regulator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplianceReport {
    pub id: String,
    pub provider_id: String,
    pub title: String,
    pub report_period: String,
    pub submitted_date: DateTime<Utc>,
    pub status: ReportStatus,
    #[serde(default)]
    pub review_notes: String,
    pub waste_volume: f64,
    /// Kilograms per disposal method, e.g. `recycled`, `landfill`.
    #[serde(default)]
    pub disposal_methods: BTreeMap<String, f64>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub approval_date: Option<DateTime<Utc>>,
}

/// Compliance report with the filing provider's name resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplianceReportView {
    pub report: ComplianceReport,
    pub provider_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WasteByType {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonthlyCollection {
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServicePerformance {
    pub provider: String,
    pub on_time_rate: f64,
    pub completion_rate: f64,
}

/// Region-wide aggregates shown to government users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Analytics {
    pub total_waste_collected: f64,
    #[serde(default)]
    pub waste_by_type: Vec<WasteByType>,
    #[serde(default)]
    pub monthly_collection: Vec<MonthlyCollection>,
    #[serde(default)]
    pub service_performance: Vec<ServicePerformance>,
    pub compliance_rate: f64,
}

impl Analytics {
    /// Share of `total_waste_collected` in percent, 0 when the total is 0.
    pub fn share_of_total(&self, value: f64) -> f64 {
        if self.total_waste_collected > 0.0 {
            value / self.total_waste_collected * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_without_approval_deserializes() {
        let json = r#"{
            "id": "r3", "provider_id": "p1",
            "title": "February 2025 Waste Disposal Report",
            "report_period": "February 2025",
            "submitted_date": "2025-03-04T16:20:00Z",
            "status": "under_review",
            "review_notes": "Pending verification of recycling percentages",
            "waste_volume": 720,
            "disposal_methods": {"recycled": 520, "landfill": 70, "incinerated": 130},
            "approved_by": null, "approval_date": null
        }"#;
        let report: ComplianceReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, ReportStatus::UnderReview);
        assert!(report.approved_by.is_none());
        assert_eq!(report.disposal_methods.values().sum::<f64>(), 720.0);
    }

    #[test]
    fn share_of_total_handles_empty_totals() {
        let empty = Analytics::default();
        assert_eq!(empty.share_of_total(10.0), 0.0);

        let analytics = Analytics {
            total_waste_collected: 200.0,
            ..Analytics::default()
        };
        assert_eq!(analytics.share_of_total(50.0), 25.0);
    }

    #[test]
    fn report_status_parse() {
        assert_eq!(ReportStatus::parse("approved"), Some(ReportStatus::Approved));
        assert_eq!(ReportStatus::parse("Approved"), None);
    }
}
