use dioxus::prelude::*;
use shared_types::{access, SessionState};

use crate::auth::use_auth;
use crate::routes::Route;

/// Where the 404 page sends the visitor, with the link text.
///
/// An unsettled session goes to `/`, where the guard picks the destination.
fn way_back(session: &SessionState) -> (Route, String) {
    match session {
        SessionState::Active(user) => {
            let target = access::dashboard_path(user.role)
                .parse::<Route>()
                .unwrap_or(Route::Home {});
            (target, format!("Back to the {} dashboard", user.role.label()))
        }
        SessionState::Anonymous => (Route::Login {}, "Sign in to WasteTrack".to_string()),
        SessionState::Loading => (Route::Home {}, "Back to WasteTrack".to_string()),
    }
}

/// Shown for any path no route matches.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));
    let (target, label) = way_back(&auth.session.read());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "No such page in WasteTrack" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not a pickup, report or dashboard page."
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}
