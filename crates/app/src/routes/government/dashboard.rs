use dioxus::prelude::*;

use crate::components::{
    Card, EmptyState, ErrorPanel, LoadingPanel, PageHeader, ReportTable, StatCard,
};
use crate::format_helpers::{format_kg, format_percent};
use crate::routes::Route;

#[component]
pub fn GovernmentDashboard() -> Element {
    let data = use_resource(|| async move { server::api::get_government_dashboard().await });

    let view = match &*data.read() {
        Some(Ok(dashboard)) => rsx! {
            DashboardBody { dashboard: dashboard.clone() }
        },
        Some(Err(e)) => rsx! {
            ErrorPanel { error: e.to_string() }
        },
        None => rsx! {
            LoadingPanel {}
        },
    };
    view
}

#[component]
fn DashboardBody(dashboard: shared_types::GovernmentDashboard) -> Element {
    let stats = &dashboard.stats;

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Regulatory Overview",
                subtitle: "Waste management activity across registered operators".to_string(),
            }

            div { class: "stat-grid",
                StatCard { label: "Registered Businesses", value: stats.total_businesses.to_string() }
                StatCard { label: "Licensed Providers", value: stats.total_providers.to_string() }
                StatCard { label: "Total Pickups", value: stats.total_pickups.to_string() }
            }
            div { class: "stat-grid",
                StatCard {
                    label: "Pending Reports",
                    value: stats.pending_reports.to_string(),
                    hint: "Under review".to_string(),
                }
                StatCard { label: "Compliance Rate", value: format_percent(stats.compliance_rate) }
                StatCard { label: "Waste Collected", value: format_kg(stats.total_waste_collected) }
            }

            Card { title: "Recent Compliance Reports".to_string(),
                if dashboard.recent_reports.is_empty() {
                    EmptyState { message: "No reports submitted yet." }
                } else {
                    ReportTable { reports: dashboard.recent_reports.clone(), show_provider: true }
                }
                Link { to: Route::GovernmentCompliance {}, class: "card-link",
                    "View all reports"
                }
            }
        }
    }
}
