use dioxus::prelude::*;
use shared_types::query::Perspective;

use crate::components::{Card, ErrorPanel, LoadingPanel, PageHeader, PickupTable, StatCard};
use crate::format_helpers::format_kg;
use crate::routes::Route;

#[component]
pub fn BusinessDashboard() -> Element {
    let data = use_resource(|| async move { server::api::get_business_dashboard().await });

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
fn DashboardBody(dashboard: shared_types::BusinessDashboard) -> Element {
    let stats = &dashboard.stats;

    rsx! {
        div { class: "container",
            PageHeader {
                title: format!("Welcome back, {}", dashboard.business.name),
                subtitle: "Here's an overview of your waste management activity".to_string(),
                Link { to: Route::BusinessRequestPickup {}, class: "button",
                    "Request Pickup"
                }
            }

            div { class: "stat-grid",
                StatCard { label: "Completed Pickups", value: stats.completed.to_string() }
                StatCard { label: "Scheduled Pickups", value: stats.scheduled.to_string() }
                StatCard { label: "In Progress", value: stats.in_progress.to_string() }
                StatCard {
                    label: "Total Waste Disposed",
                    value: format_kg(stats.total_waste_disposed_kg),
                    hint: "Completed pickups only".to_string(),
                }
            }

            Card { title: "Recent Pickups".to_string(),
                PickupTable {
                    pickups: dashboard.recent_pickups.clone(),
                    perspective: Perspective::Business,
                }
                Link { to: Route::BusinessPickups {}, class: "card-link", "View all pickups" }
            }
        }
    }
}
