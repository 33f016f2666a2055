use dioxus::prelude::*;

use crate::components::{Card, EmptyState, ErrorPanel, LoadingPanel, PageHeader, StatCard};
use crate::format_helpers::format_kg;

#[component]
pub fn BusinessReports() -> Element {
    let data = use_resource(|| async move { server::api::get_business_reports().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Reports",
                subtitle: "Volumes collected per waste type".to_string(),
            }

            match &*data.read() {
                Some(Ok(rows)) if rows.is_empty() => rsx! {
                    EmptyState { message: "No pickups to report on yet." }
                },
                Some(Ok(rows)) => {
                    let total: f64 = rows.iter().map(|r| r.volume_kg).sum();
                    let pickups: usize = rows.iter().map(|r| r.pickups).sum();
                    rsx! {
                        div { class: "stat-grid",
                            StatCard { label: "Total Volume", value: format_kg(total) }
                            StatCard { label: "Pickups", value: pickups.to_string() }
                            StatCard { label: "Waste Types", value: rows.len().to_string() }
                        }
                        Card { title: "Volume by Waste Type".to_string(),
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Waste Type" }
                                        th { "Pickups" }
                                        th { "Volume" }
                                    }
                                }
                                tbody {
                                    for row in rows.iter() {
                                        tr { key: "{row.waste_type_name}",
                                            td { "{row.waste_type_name}" }
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
