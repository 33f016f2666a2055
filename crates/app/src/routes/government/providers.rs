use dioxus::prelude::*;

use crate::components::{
    Badge, BadgeTone, EmptyState, ErrorPanel, FilterBar, LoadingPanel, PageHeader,
};

#[component]
pub fn GovernmentProviders() -> Element {
    let search = use_signal(String::new);

    let data = use_resource(move || {
        let term = Some(search()).filter(|s| !s.trim().is_empty());
        async move { server::api::list_providers(term).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Waste Providers",
                subtitle: "Licensed collection and disposal companies".to_string(),
            }

            FilterBar { search, placeholder: "Search by company or contact person..." }

            match &*data.read() {
                Some(Ok(providers)) if providers.is_empty() => rsx! {
                    EmptyState { message: "No providers match your search." }
                },
                Some(Ok(providers)) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Company" }
                                th { "License" }
                                th { "Contact" }
                                th { "Location" }
                                th { "Service Radius" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for provider in providers.iter() {
                                tr { key: "{provider.id}",
                                    td { "{provider.company_name}" }
                                    td { "{provider.license_number}" }
                                    td {
                                        div { "{provider.contact_person}" }
                                        div { class: "muted", "{provider.phone}" }
                                    }
                                    td { "{provider.city}, {provider.state}" }
                                    td { "{provider.service_radius_km} km" }
                                    td {
                                        if provider.verified {
                                            Badge { tone: BadgeTone::Success, "Verified" }
                                        } else {
                                            Badge { tone: BadgeTone::Warning, "Unverified" }
                                        }
                                    }
                                }
                            }
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
