use dioxus::prelude::*;
use shared_types::query::{PickupFilter, Perspective};

use crate::components::{
    pickup_status_options, ErrorPanel, FilterBar, LoadingPanel, PageHeader, PickupTable,
};
use crate::routes::Route;

#[component]
pub fn BusinessPickups() -> Element {
    let search = use_signal(String::new);
    let status = use_signal(|| "all".to_string());

    let data = use_resource(move || {
        let filter = PickupFilter::new(status(), search());
        async move { server::api::list_business_pickups(filter).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "My Pickups",
                subtitle: "Track and manage your waste pickup requests".to_string(),
                Link { to: Route::BusinessRequestPickup {}, class: "button", "Request Pickup" }
            }

            FilterBar {
                search,
                placeholder: "Search by waste type, provider, notes or address...",
                status: Some(status),
                status_options: pickup_status_options(),
            }

            match &*data.read() {
                Some(Ok(pickups)) => rsx! {
                    PickupTable { pickups: pickups.clone(), perspective: Perspective::Business }
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
