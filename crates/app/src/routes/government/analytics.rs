use dioxus::prelude::*;
use shared_types::Analytics;

use crate::components::{Card, ErrorPanel, LoadingPanel, PageHeader, StatCard};
use crate::format_helpers::{format_kg, format_percent};

#[component]
pub fn GovernmentAnalytics() -> Element {
    let data = use_resource(|| async move { server::api::get_analytics().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Analytics",
                subtitle: "Collection volumes and provider performance".to_string(),
            }

            match &*data.read() {
                Some(Ok(analytics)) => rsx! {
                    AnalyticsBody { analytics: analytics.clone() }
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

/// Tabular rendering; each share is drawn as a plain CSS bar.
#[component]
fn AnalyticsBody(analytics: Analytics) -> Element {
    let peak_month = analytics
        .monthly_collection
        .iter()
        .map(|m| m.amount)
        .fold(0.0_f64, f64::max);

    let by_type: Vec<(String, String, String)> = analytics
        .waste_by_type
        .iter()
        .map(|entry| {
            let share = analytics.share_of_total(entry.value);
            (
                entry.name.clone(),
                format!("width: {share:.1}%"),
                format!("{} ({})", format_kg(entry.value), format_percent(share)),
            )
        })
        .collect();
    let by_month: Vec<(String, String, String)> = analytics
        .monthly_collection
        .iter()
        .map(|m| {
            (
                m.month.clone(),
                format!("width: {:.1}%", bar_width(m.amount, peak_month)),
                format_kg(m.amount),
            )
        })
        .collect();

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Total Waste Collected", value: format_kg(analytics.total_waste_collected) }
            StatCard { label: "Compliance Rate", value: format_percent(analytics.compliance_rate) }
        }

        div { class: "detail-grid",
            Card { title: "Waste by Type".to_string(),
                for (name, style, value) in by_type {
                    div { class: "bar-row", key: "{name}",
                        span { class: "bar-label", "{name}" }
                        div { class: "bar-track",
                            div { class: "bar-fill", style: "{style}" }
                        }
                        span { class: "bar-value", "{value}" }
                    }
                }
            }

            Card { title: "Monthly Collection".to_string(),
                for (month, style, value) in by_month {
                    div { class: "bar-row", key: "{month}",
                        span { class: "bar-label", "{month}" }
                        div { class: "bar-track",
                            div { class: "bar-fill", style: "{style}" }
                        }
                        span { class: "bar-value", "{value}" }
                    }
                }
            }
        }

        Card { title: "Service Performance".to_string(),
            table { class: "data-table",
                thead {
                    tr {
                        th { "Provider" }
                        th { "On-Time Rate" }
                        th { "Completion Rate" }
                    }
                }
                tbody {
                    for row in analytics.service_performance.iter() {
                        tr { key: "{row.provider}",
                            td { "{row.provider}" }
                            td { "{format_percent(row.on_time_rate)}" }
                            td { "{format_percent(row.completion_rate)}" }
                        }
                    }
                }
            }
        }
    }
}

/// Bar length relative to the largest value, in percent.
fn bar_width(value: f64, peak: f64) -> f64 {
    if peak > 0.0 {
        (value / peak * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
