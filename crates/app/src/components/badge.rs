use dioxus::prelude::*;
use shared_types::{
    DriverStatus, PaymentStatus, PickupStatus, ReportStatus, RouteStatus, VehicleStatus,
};

/// Colour family for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Info => "info",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
        }
    }
}

pub fn pickup_tone(status: PickupStatus) -> BadgeTone {
    match status {
        PickupStatus::Scheduled => BadgeTone::Info,
        PickupStatus::InProgress => BadgeTone::Warning,
        PickupStatus::Completed => BadgeTone::Success,
        PickupStatus::Cancelled => BadgeTone::Danger,
    }
}

pub fn payment_tone(status: PaymentStatus) -> BadgeTone {
    match status {
        PaymentStatus::Pending => BadgeTone::Warning,
        PaymentStatus::Paid => BadgeTone::Success,
        PaymentStatus::Failed => BadgeTone::Danger,
    }
}

pub fn report_tone(status: ReportStatus) -> BadgeTone {
    match status {
        ReportStatus::Submitted => BadgeTone::Info,
        ReportStatus::UnderReview => BadgeTone::Warning,
        ReportStatus::Approved => BadgeTone::Success,
        ReportStatus::Rejected => BadgeTone::Danger,
    }
}

pub fn vehicle_tone(status: VehicleStatus) -> BadgeTone {
    match status {
        VehicleStatus::Active => BadgeTone::Success,
        VehicleStatus::Maintenance => BadgeTone::Warning,
        VehicleStatus::Inactive => BadgeTone::Neutral,
    }
}

pub fn driver_tone(status: DriverStatus) -> BadgeTone {
    match status {
        DriverStatus::OnDuty => BadgeTone::Success,
        DriverStatus::OffDuty => BadgeTone::Neutral,
        DriverStatus::OnLeave => BadgeTone::Warning,
    }
}

pub fn route_tone(status: RouteStatus) -> BadgeTone {
    match status {
        RouteStatus::Scheduled => BadgeTone::Info,
        RouteStatus::InProgress => BadgeTone::Warning,
        RouteStatus::Completed => BadgeTone::Success,
    }
}

/// Inline label for a status or category.
#[component]
pub fn Badge(#[props(default)] tone: BadgeTone, children: Element) -> Element {
    rsx! {
        span { class: "badge", "data-tone": tone.class(), {children} }
    }
}

#[component]
pub fn PickupStatusBadge(status: PickupStatus) -> Element {
    rsx! {
        Badge { tone: pickup_tone(status), "{status.label()}" }
    }
}

#[component]
pub fn ReportStatusBadge(status: ReportStatus) -> Element {
    rsx! {
        Badge { tone: report_tone(status), "{status.label()}" }
    }
}
