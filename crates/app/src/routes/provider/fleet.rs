use dioxus::prelude::*;
use shared_types::Fleet;

use crate::components::{
    driver_tone, vehicle_tone, Badge, Card, EmptyState, ErrorPanel, LoadingPanel, PageHeader,
    StatCard,
};
use crate::format_helpers::format_day;

#[component]
pub fn ProviderFleet() -> Element {
    let data = use_resource(|| async move { server::api::get_fleet().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Fleet Management",
                subtitle: "Vehicles and drivers registered to your company".to_string(),
            }

            match &*data.read() {
                Some(Ok(fleet)) => rsx! {
                    FleetBody { fleet: fleet.clone() }
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
fn FleetBody(fleet: Fleet) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Vehicles", value: fleet.vehicles.len().to_string() }
            StatCard { label: "In Maintenance", value: fleet.vehicles_in_maintenance().to_string() }
            StatCard { label: "Drivers", value: fleet.drivers.len().to_string() }
            StatCard { label: "On Duty", value: fleet.drivers_on_duty().to_string() }
        }

        Card { title: "Vehicles".to_string(),
            if fleet.vehicles.is_empty() {
                EmptyState { message: "No vehicles registered." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Vehicle" }
                            th { "Type" }
                            th { "Capacity" }
                            th { "License Plate" }
                            th { "Last Maintenance" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for vehicle in fleet.vehicles.iter() {
                            tr { key: "{vehicle.id}",
                                td { "{vehicle.vehicle_number}" }
                                td { "{vehicle.vehicle_type}" }
                                td { "{vehicle.capacity}" }
                                td { "{vehicle.license_plate}" }
                                td { "{format_day(&vehicle.last_maintenance)}" }
                                td {
                                    Badge { tone: vehicle_tone(vehicle.status), "{vehicle.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        Card { title: "Drivers".to_string(),
            if fleet.drivers.is_empty() {
                EmptyState { message: "No drivers registered." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "License" }
                            th { "Phone" }
                            th { "Email" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for driver in fleet.drivers.iter() {
                            tr { key: "{driver.id}",
                                td { "{driver.name}" }
                                td { "{driver.license_number}" }
                                td { "{driver.phone}" }
                                td { "{driver.email}" }
                                td {
                                    Badge { tone: driver_tone(driver.status), "{driver.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
