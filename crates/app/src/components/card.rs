use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] title: Option<String>, children: Element) -> Element {
    rsx! {
        section { class: "card",
            if let Some(title) = title {
                h2 { class: "card-title", "{title}" }
            }
            div { class: "card-content", {children} }
        }
    }
}

/// Single headline number on a dashboard.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
            if let Some(hint) = hint {
                span { class: "stat-hint", "{hint}" }
            }
        }
    }
}

/// Label/value rows for profile and detail pages.
#[component]
pub fn DetailList(rows: Vec<(String, String)>) -> Element {
    rsx! {
        dl { class: "detail-list",
            for (label, value) in rows {
                div { class: "detail-row",
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }
    }
}
