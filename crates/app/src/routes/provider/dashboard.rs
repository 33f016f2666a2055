use dioxus::prelude::*;
use shared_types::query::Perspective;

use crate::components::{Card, ErrorPanel, LoadingPanel, PageHeader, PickupTable, StatCard};
use crate::format_helpers::format_kg;
use crate::routes::Route;

#[component]
pub fn ProviderDashboard() -> Element {
    let data = use_resource(|| async move { server::api::get_provider_dashboard().await });

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
fn DashboardBody(dashboard: shared_types::ProviderDashboard) -> Element {
    let stats = &dashboard.stats;

    rsx! {
        div { class: "container",
            PageHeader {
                title: dashboard.provider.company_name.clone(),
                subtitle: format!("License {}", dashboard.provider.license_number),
            }

            div { class: "stat-grid",
                StatCard { label: "Total Pickups", value: stats.total_pickups.to_string() }
                StatCard { label: "Completed", value: stats.completed.to_string() }
                StatCard { label: "Pending", value: stats.pending.to_string() }
                StatCard { label: "In Progress", value: stats.in_progress.to_string() }
            }
            div { class: "stat-grid",
                StatCard {
                    label: "Waste Collected",
                    value: format_kg(stats.total_waste_collected_kg),
                    hint: "Completed and in-progress pickups".to_string(),
                }
                StatCard { label: "Businesses Served", value: stats.businesses_served.to_string() }
                StatCard { label: "Vehicles", value: stats.vehicles.to_string() }
                StatCard { label: "Drivers", value: stats.drivers.to_string() }
            }

            Card { title: "Upcoming Pickups".to_string(),
                PickupTable {
                    pickups: dashboard.upcoming_pickups.clone(),
                    perspective: Perspective::Provider,
                }
                Link { to: Route::ProviderPickupRequests {}, class: "card-link",
                    "View all pickup requests"
                }
            }
        }
    }
}
