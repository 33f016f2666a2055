use dioxus::prelude::*;
use shared_types::query::Perspective;
use shared_types::PickupView;

use super::{EmptyState, PickupStatusBadge};
use crate::format_helpers::{format_date, format_kg};
use crate::routes::Route;

/// Pickup rows. The counterparty column shows the provider to businesses and
/// the business to providers; business rows link to the detail page.
#[component]
pub fn PickupTable(pickups: Vec<PickupView>, perspective: Perspective) -> Element {
    if pickups.is_empty() {
        return rsx! { EmptyState { message: "No pickups found." } };
    }

    let counterparty = match perspective {
        Perspective::Business => "Provider",
        Perspective::Provider => "Business",
        Perspective::Government => "Business / Provider",
    };

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "Scheduled" }
                    th { "Waste Type" }
                    th { "{counterparty}" }
                    th { "Volume" }
                    th { "Address" }
                    th { "Status" }
                }
            }
            tbody {
                for view in pickups {
                    tr { key: "{view.pickup.id}",
                        td {
                            if perspective == Perspective::Business {
                                Link {
                                    to: Route::BusinessPickupDetail { id: view.pickup.id.clone() },
                                    "{format_date(&view.pickup.scheduled_date)}"
                                }
                            } else {
                                "{format_date(&view.pickup.scheduled_date)}"
                            }
                        }
                        td { "{view.waste_type_name}" }
                        td {
                            match perspective {
                                Perspective::Business => view.provider_name.clone(),
                                Perspective::Provider => view.business_name.clone(),
                                Perspective::Government => {
                                    format!("{} / {}", view.business_name, view.provider_name)
                                }
                            }
                        }
                        td { "{format_kg(view.pickup.volume_kg)}" }
                        td { "{view.pickup.pickup_address}" }
                        td { PickupStatusBadge { status: view.pickup.status } }
                    }
                }
            }
        }
    }
}
