use dioxus::prelude::*;
use shared_types::AppError;

#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        header { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}

#[component]
pub fn LoadingPanel() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "skeleton" }
            div { class: "skeleton" }
            div { class: "skeleton" }
        }
    }
}

/// Friendly rendering of a failed server call.
#[component]
pub fn ErrorPanel(error: String) -> Element {
    let message = AppError::friendly_message(&error);
    rsx! {
        div { class: "error-panel", role: "alert", "{message}" }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state", p { "{message}" } }
    }
}
