use dioxus::prelude::*;

use crate::components::{Badge, BadgeTone, EmptyState, ErrorPanel, LoadingPanel, PageHeader};
use crate::format_helpers::format_kg;

#[component]
pub fn BusinessWasteProfile() -> Element {
    let data = use_resource(|| async move { server::api::get_waste_profiles().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Waste Profile",
                subtitle: "The waste streams your business typically produces".to_string(),
            }

            match &*data.read() {
                Some(Ok(profiles)) if profiles.is_empty() => rsx! {
                    EmptyState { message: "No waste profiles on file." }
                },
                Some(Ok(profiles)) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Waste Type" }
                                th { "Estimated Volume" }
                                th { "Handling" }
                                th { "Notes" }
                            }
                        }
                        tbody {
                            for view in profiles.iter() {
                                tr { key: "{view.profile.id}",
                                    td { "{view.waste_type_name}" }
                                    td { "{format_kg(view.profile.estimated_volume_kg)}" }
                                    td {
                                        if view.hazardous {
                                            Badge { tone: BadgeTone::Danger, "Hazardous" }
                                        } else {
                                            Badge { "Standard" }
                                        }
                                    }
                                    td { "{view.profile.notes}" }
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
