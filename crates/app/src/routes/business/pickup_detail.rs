use dioxus::prelude::*;
use shared_types::{AppError, PickupDetail};

use crate::components::{
    payment_tone, Badge, Card, DetailList, ErrorPanel, LoadingPanel, PageHeader,
    PickupStatusBadge,
};
use crate::format_helpers::{
    format_amount, format_date, format_datetime, format_kg, format_optional_datetime,
};
use crate::routes::Route;
use crate::task::use_cancel_token;

#[component]
pub fn BusinessPickupDetail(id: String) -> Element {
    let pickup_id = id.clone();
    let mut data = use_resource(move || {
        let pid = pickup_id.clone();
        async move { server::api::get_pickup_detail(pid).await }
    });

    let token = use_cancel_token();
    let mut confirming = use_signal(|| false);
    let mut cancelling = use_signal(|| false);
    let mut cancel_error = use_signal(|| Option::<String>::None);

    let cancel_id = id.clone();
    let handle_cancel = move |_: MouseEvent| {
        let pid = cancel_id.clone();
        let token = token.clone();
        spawn(async move {
            cancelling.set(true);
            cancel_error.set(None);
            let result = server::api::cancel_pickup(pid).await;
            let Some(result) = token.deliver(result) else {
                return;
            };
            match result {
                Ok(pickup) => {
                    tracing::info!(pickup_id = %pickup.id, "pickup cancelled");
                    data.restart();
                }
                Err(e) => {
                    cancel_error.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
            cancelling.set(false);
            confirming.set(false);
        });
    };

    rsx! {
        div { class: "container",
            match &*data.read() {
                Some(Ok(detail)) => rsx! {
                    PageHeader {
                        title: "Pickup Details",
                        subtitle: format!("Request {}", detail.view.pickup.id),
                        Link { to: Route::BusinessPickups {}, class: "button secondary",
                            "Back to Pickups"
                        }
                        if detail.view.pickup.status.is_cancellable() && !confirming() {
                            button {
                                class: "button danger",
                                onclick: move |_| confirming.set(true),
                                "Cancel Pickup"
                            }
                        }
                    }

                    if confirming() {
                        div { class: "confirm-panel", role: "alertdialog",
                            p { "Cancel this pickup? The provider will be notified and the slot released." }
                            div { class: "confirm-actions",
                                button {
                                    class: "button secondary",
                                    disabled: cancelling(),
                                    onclick: move |_| confirming.set(false),
                                    "Keep Pickup"
                                }
                                button {
                                    class: "button danger",
                                    disabled: cancelling(),
                                    onclick: handle_cancel.clone(),
                                    if cancelling() { "Cancelling..." } else { "Confirm Cancellation" }
                                }
                            }
                        }
                    }

                    if let Some(err) = cancel_error() {
                        div { class: "error-panel", role: "alert", "{err}" }
                    }

                    DetailBody { detail: detail.clone() }
                },
                Some(Err(e)) => rsx! {
                    ErrorPanel { error: e.to_string() }
                    Link { to: Route::BusinessPickups {}, class: "button secondary",
                        "Back to Pickups"
                    }
                },
                None => rsx! {
                    LoadingPanel {}
                },
            }
        }
    }
}

#[component]
fn DetailBody(detail: PickupDetail) -> Element {
    let pickup = &detail.view.pickup;

    let waste_type = match &detail.waste_type {
        Some(wt) => wt.select_label(),
        None => detail.view.waste_type_name.clone(),
    };
    let notes = if pickup.notes.is_empty() {
        "None".to_string()
    } else {
        pickup.notes.clone()
    };

    let information = vec![
        ("Waste Type".to_string(), waste_type),
        ("Volume".to_string(), format_kg(pickup.volume_kg)),
        ("Scheduled Date".to_string(), format_date(&pickup.scheduled_date)),
        ("Pickup Address".to_string(), pickup.pickup_address.clone()),
        ("Requested".to_string(), format_datetime(&pickup.created_at)),
        ("Last Updated".to_string(), format_datetime(&pickup.updated_at)),
        ("Notes".to_string(), notes),
    ];

    let provider = match &detail.provider {
        Some(p) => vec![
            ("Company".to_string(), p.company_name.clone()),
            ("Contact".to_string(), p.contact_person.clone()),
            ("Phone".to_string(), p.phone.clone()),
            ("Email".to_string(), p.email.clone()),
        ],
        None => vec![("Company".to_string(), detail.view.provider_name.clone())],
    };

    let tracking = pickup.tracking.as_ref().map(|t| {
        vec![
            ("Status".to_string(), t.current_status.clone()),
            ("Vehicle".to_string(), t.assigned_vehicle.clone()),
            ("Driver".to_string(), t.assigned_driver.clone()),
            (
                "Estimated Arrival".to_string(),
                format_optional_datetime(t.estimated_arrival.as_ref()),
            ),
            (
                "Picked Up".to_string(),
                format_optional_datetime(t.actual_pickup_time.as_ref()),
            ),
            (
                "Disposal Completed".to_string(),
                format_optional_datetime(t.disposal_completion_time.as_ref()),
            ),
        ]
    });

    rsx! {
        div { class: "detail-grid",
            Card { title: "Pickup Information".to_string(),
                div { class: "detail-status",
                    PickupStatusBadge { status: pickup.status }
                }
                DetailList { rows: information }
            }

            Card { title: "Provider".to_string(),
                DetailList { rows: provider }
            }

            Card { title: "Tracking".to_string(),
                match tracking {
                    Some(rows) => rsx! { DetailList { rows } },
                    None => rsx! {
                        p { class: "muted", "Estimated arrival: Not available" }
                    },
                }
            }

            Card { title: "Payment".to_string(),
                div { class: "detail-status",
                    Badge { tone: payment_tone(pickup.payment_status),
                        "{pickup.payment_status.label()}"
                    }
                }
                DetailList {
                    rows: vec![("Amount".to_string(), format_amount(pickup.total_amount))],
                }
            }
        }
    }
}
