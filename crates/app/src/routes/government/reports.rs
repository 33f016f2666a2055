use dioxus::prelude::*;

use crate::components::{Card, EmptyState, ErrorPanel, LoadingPanel, PageHeader, StatCard};
use crate::format_helpers::format_kg;

#[component]
pub fn GovernmentReports() -> Element {
    let data = use_resource(|| async move { server::api::get_government_reports().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Reports",
                subtitle: "Pickup activity per licensed provider".to_string(),
            }

            match &*data.read() {
                Some(Ok(rows)) if rows.is_empty() => rsx! {
                    EmptyState { message: "No provider activity recorded yet." }
                },
                Some(Ok(rows)) => {
                    let pickups: usize = rows.iter().map(|r| r.pickups).sum();
                    let completed: usize = rows.iter().map(|r| r.completed).sum();
                    let volume: f64 = rows.iter().map(|r| r.volume_kg).sum();
                    rsx! {
                        div { class: "stat-grid",
                            StatCard { label: "Pickups", value: pickups.to_string() }
                            StatCard { label: "Completed", value: completed.to_string() }
                            StatCard { label: "Total Volume", value: format_kg(volume) }
                        }
                        Card { title: "Provider Activity".to_string(),
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Provider" }
                                        th { "Pickups" }
                                        th { "Completed" }
                                        th { "Volume" }
                                    }
                                }
                                tbody {
                                    for row in rows.iter() {
                                        tr { key: "{row.provider_id}",
                                            td { "{row.provider_name}" }
                                            td { "{row.pickups}" }
                                            td { "{row.completed}" }
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
