use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{Card, DetailList, PageHeader};

/// Government accounts have no linked entity; show the session itself.
#[component]
pub fn GovernmentSettings() -> Element {
    let auth = use_auth();
    let rows = match auth.user() {
        Some(user) => vec![
            ("Email".to_string(), user.email),
            ("Role".to_string(), user.role.label().to_string()),
            ("Account ID".to_string(), user.id),
        ],
        None => Vec::new(),
    };

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Settings",
                subtitle: "Your account".to_string(),
            }
            Card { title: "Session".to_string(),
                DetailList { rows }
            }
        }
    }
}
