use dioxus::prelude::*;

use crate::components::{Badge, BadgeTone, Card, DetailList, ErrorPanel, LoadingPanel, PageHeader};

/// Read-only company profile.
#[component]
pub fn ProviderSettings() -> Element {
    let data = use_resource(|| async move { server::api::get_provider_profile().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Settings",
                subtitle: "Your company profile".to_string(),
            }

            match &*data.read() {
                Some(Ok(provider)) => rsx! {
                    Card { title: provider.company_name.clone(),
                        div { class: "detail-status",
                            if provider.verified {
                                Badge { tone: BadgeTone::Success, "Verified" }
                            } else {
                                Badge { tone: BadgeTone::Warning, "Pending Verification" }
                            }
                        }
                        DetailList {
                            rows: vec![
                                ("License Number".to_string(), provider.license_number.clone()),
                                ("Contact Person".to_string(), provider.contact_person.clone()),
                                ("Phone".to_string(), provider.phone.clone()),
                                ("Email".to_string(), provider.email.clone()),
                                (
                                    "Address".to_string(),
                                    format!("{}, {}, {}", provider.address, provider.city, provider.state),
                                ),
                                ("Postal Code".to_string(), provider.postal_code.clone()),
                                (
                                    "Service Radius".to_string(),
                                    format!("{} km", provider.service_radius_km),
                                ),
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
