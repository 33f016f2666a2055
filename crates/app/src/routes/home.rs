use dioxus::prelude::*;

/// `/` has no content of its own; the guard always forwards from here.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}
