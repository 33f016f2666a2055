use dioxus::prelude::*;

use crate::components::{Badge, BadgeTone, Card, DetailList, ErrorPanel, LoadingPanel, PageHeader};

/// Read-only business profile.
#[component]
pub fn BusinessSettings() -> Element {
    let data = use_resource(|| async move { server::api::get_business_profile().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Settings",
                subtitle: "Your business profile".to_string(),
            }

            match &*data.read() {
                Some(Ok(business)) => rsx! {
                    Card { title: business.name.clone(),
                        div { class: "detail-status",
                            if business.verified {
                                Badge { tone: BadgeTone::Success, "Verified" }
                            } else {
                                Badge { tone: BadgeTone::Warning, "Pending Verification" }
                            }
                        }
                        DetailList {
                            rows: vec![
                                ("Business Type".to_string(), business.business_type.clone()),
                                ("Contact Person".to_string(), business.contact_person.clone()),
                                ("Phone".to_string(), business.phone.clone()),
                                ("Email".to_string(), business.email.clone()),
                                ("Address".to_string(), business.full_address()),
                                ("Postal Code".to_string(), business.postal_code.clone()),
                            ],
                        }
                    }
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
