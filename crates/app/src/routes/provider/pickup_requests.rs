use dioxus::prelude::*;
use shared_types::query::{PickupFilter, Perspective};

use crate::components::{
    pickup_status_options, ErrorPanel, FilterBar, LoadingPanel, PageHeader, PickupTable,
};

#[component]
pub fn ProviderPickupRequests() -> Element {
    let search = use_signal(String::new);
    let status = use_signal(|| "all".to_string());

    let data = use_resource(move || {
        let filter = PickupFilter::new(status(), search());
        async move { server::api::list_provider_pickups(filter).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Pickup Requests",
                subtitle: "Collections assigned to your company".to_string(),
            }

            FilterBar {
                search,
                placeholder: "Search by waste type, business, notes or address...",
                status: Some(status),
                status_options: pickup_status_options(),
            }

            match &*data.read() {
                Some(Ok(pickups)) => rsx! {
                    PickupTable { pickups: pickups.clone(), perspective: Perspective::Provider }
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
