use dioxus::prelude::*;

use crate::components::{
    Card, EmptyState, ErrorPanel, LoadingPanel, PageHeader, PickupStatusBadge, StatCard,
};
use crate::format_helpers::format_kg;

#[component]
pub fn ProviderReports() -> Element {
    let data = use_resource(|| async move { server::api::get_provider_reports().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Reports",
                subtitle: "Pickup counts and volumes by status".to_string(),
            }

            match &*data.read() {
                Some(Ok(rows)) if rows.is_empty() => rsx! {
                    EmptyState { message: "No pickups to report on yet." }
                },
                Some(Ok(rows)) => {
                    let pickups: usize = rows.iter().map(|r| r.pickups).sum();
                    let volume: f64 = rows.iter().map(|r| r.volume_kg).sum();
                    rsx! {
                        div { class: "stat-grid",
                            StatCard { label: "Pickups", value: pickups.to_string() }
                            StatCard { label: "Total Volume", value: format_kg(volume) }
                        }
                        Card { title: "Status Breakdown".to_string(),
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Status" }
                                        th { "Pickups" }
                                        th { "Volume" }
                                    }
                                }
                                tbody {
                                    for row in rows.iter() {
                                        tr { key: "{row.status}",
                                            td { PickupStatusBadge { status: row.status } }
                                            td { "{row.pickups}" }
                                            td { "{format_kg(row.volume_kg)}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
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
