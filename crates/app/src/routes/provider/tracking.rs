use dioxus::prelude::*;
use shared_types::{RouteView, TrackingOverview};

use crate::components::{
    driver_tone, route_tone, vehicle_tone, Badge, Card, EmptyState, ErrorPanel, LoadingPanel,
    PageHeader, StatCard,
};
use crate::format_helpers::format_optional_datetime;

fn progress(route: &RouteView) -> String {
    format!("{}/{} pickups", route.pickups_completed, route.pickups_planned)
}

#[component]
pub fn ProviderTracking() -> Element {
    let data = use_resource(|| async move { server::api::get_tracking().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Routes & Tracking",
                subtitle: "Dispatched pickups by driver and vehicle".to_string(),
            }

            match &*data.read() {
                Some(Ok(overview)) => rsx! {
                    TrackingBody { overview: overview.clone() }
                },
                Some(Err(e)) => rsx! {
                    ErrorPanel { error: e.to_string() }
                },
                None => rsx! {
                    LoadingPanel {}
                },
            }
        }
    }
}

#[component]
fn TrackingBody(overview: TrackingOverview) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Routes", value: overview.routes.len().to_string() }
            StatCard { label: "Active Routes", value: overview.active_routes.to_string() }
            StatCard {
                label: "Vehicles Active",
                value: format!("{}/{}", overview.vehicles_active, overview.vehicles),
            }
            StatCard { label: "Drivers On Duty", value: overview.drivers_on_duty.to_string() }
        }

        Card { title: "Routes".to_string(),
            if overview.routes.is_empty() {
                EmptyState { message: "No pickups have been dispatched yet." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Driver" }
                            th { "Vehicle" }
                            th { "Progress" }
                            th { "Next Arrival" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for route in overview.routes.iter() {
                            tr { key: "{route.driver}-{route.vehicle}",
                                td {
                                    div { "{route.driver}" }
                                    if let Some(status) = route.driver_status {
                                        Badge { tone: driver_tone(status), "{status.label()}" }
                                    }
                                }
                                td {
                                    div { "{route.vehicle}" }
                                    if let Some(status) = route.vehicle_status {
                                        Badge { tone: vehicle_tone(status), "{status.label()}" }
                                    }
                                }
                                td { "{progress(route)}" }
                                td { "{format_optional_datetime(route.next_arrival.as_ref())}" }
                                td {
                                    Badge { tone: route_tone(route.status), "{route.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
