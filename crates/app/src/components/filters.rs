use dioxus::prelude::*;
use shared_types::{PickupStatus, ReportStatus};

/// `(value, label)` options for a pickup status select, led by "All".
pub fn pickup_status_options() -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), "All Statuses".to_string()))
        .chain(
            PickupStatus::ALL
                .iter()
                .map(|s| (s.as_str().to_string(), s.label().to_string())),
        )
        .collect()
}

pub fn report_status_options() -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), "All Statuses".to_string()))
        .chain(
            ReportStatus::ALL
                .iter()
                .map(|s| (s.as_str().to_string(), s.label().to_string())),
        )
        .collect()
}

/// Search box plus an optional status select, both bound to signals.
#[component]
pub fn FilterBar(
    search: Signal<String>,
    placeholder: String,
    #[props(default)] status: Option<Signal<String>>,
    #[props(default)] status_options: Vec<(String, String)>,
) -> Element {
    let mut search = search;

    rsx! {
        div { class: "filter-bar",
            input {
                class: "input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{search}",
                oninput: move |e: FormEvent| search.set(e.value()),
            }
            if let Some(mut status) = status {
                select {
                    class: "input",
                    value: "{status}",
                    onchange: move |e: FormEvent| status.set(e.value()),
                    for (value, label) in status_options {
                        option { value: "{value}", selected: *status.read() == value, "{label}" }
                    }
                }
            }
            if !search.read().is_empty() {
                button {
                    class: "button secondary",
                    onclick: move |_| search.set(String::new()),
                    "Clear"
                }
            }
        }
    }
}
