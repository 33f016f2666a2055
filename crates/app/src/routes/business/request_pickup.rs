use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{AppError, CreatePickupRequest, PickupFormOptions, PickupRequest};
use std::collections::HashMap;

use crate::components::{Card, DetailList, ErrorPanel, LoadingPanel, PageHeader};
use crate::format_helpers::{format_date, format_kg};
use crate::routes::Route;
use crate::task::use_cancel_token;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[component]
pub fn BusinessRequestPickup() -> Element {
    let data = use_resource(|| async move { server::api::get_pickup_form().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Request Pickup",
                subtitle: "Schedule a waste collection with a licensed provider".to_string(),
            }

            match &*data.read() {
                Some(Ok(options)) => rsx! {
                    PickupForm { options: options.clone() }
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

/// Raw form inputs, converted into a request on submit.
#[derive(Debug, Clone, PartialEq)]
struct FormInput {
    waste_type_id: String,
    volume_kg: String,
    provider_id: String,
    scheduled_date: String,
    pickup_address: String,
    city: String,
    state: String,
    postal_code: String,
    notes: String,
}

impl FormInput {
    fn from_prefill(prefill: &CreatePickupRequest) -> Self {
        Self {
            waste_type_id: prefill.waste_type_id.clone(),
            volume_kg: String::new(),
            provider_id: prefill.provider_id.clone(),
            scheduled_date: prefill.scheduled_date.format(DATE_FORMAT).to_string(),
            pickup_address: prefill.pickup_address.clone(),
            city: prefill.city.clone(),
            state: prefill.state.clone(),
            postal_code: prefill.postal_code.clone(),
            notes: prefill.notes.clone(),
        }
    }

    /// Parse the numeric and date inputs. Everything else is checked by the
    /// server so the messages stay in one place.
    fn to_request(&self) -> Result<CreatePickupRequest, HashMap<String, String>> {
        let mut errors = HashMap::new();

        let volume_kg = match self.volume_kg.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                errors.insert(
                    "volume_kg".to_string(),
                    "Volume must be at least 1 kg".to_string(),
                );
                0.0
            }
        };
        let scheduled_date = match NaiveDate::parse_from_str(self.scheduled_date.trim(), DATE_FORMAT) {
            Ok(d) => Some(d),
            Err(_) => {
                errors.insert(
                    "scheduled_date".to_string(),
                    "Scheduled date is required".to_string(),
                );
                None
            }
        };

        match scheduled_date {
            Some(scheduled_date) if errors.is_empty() => Ok(CreatePickupRequest {
                waste_type_id: self.waste_type_id.clone(),
                volume_kg,
                provider_id: self.provider_id.clone(),
                scheduled_date,
                pickup_address: self.pickup_address.clone(),
                city: self.city.clone(),
                state: self.state.clone(),
                postal_code: self.postal_code.clone(),
                notes: self.notes.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[component]
fn PickupForm(options: PickupFormOptions) -> Element {
    let token = use_cancel_token();
    let initial = FormInput::from_prefill(&options.prefill);
    let min_date = options.prefill.scheduled_date.format(DATE_FORMAT).to_string();

    let mut form = use_signal(|| initial.clone());
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let mut created = use_signal(|| Option::<PickupRequest>::None);

    let handle_submit = move |evt: FormEvent| {
        let token = token.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);

            let req = match form.read().to_request() {
                Ok(req) => req,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(HashMap::new());
            submitting.set(true);

            let result = server::api::create_pickup(req).await;
            let Some(result) = token.deliver(result) else {
                return;
            };
            match result {
                Ok(pickup) => {
                    tracing::info!(pickup_id = %pickup.id, "pickup requested");
                    created.set(Some(pickup));
                }
                Err(e) => {
                    let message = e.to_string();
                    let errors = AppError::parse_field_errors(&message);
                    if errors.is_empty() {
                        error_msg.set(Some(AppError::friendly_message(&message)));
                    } else {
                        field_errors.set(errors);
                    }
                }
            }
            submitting.set(false);
        }
    };

    if let Some(pickup) = created() {
        let reset = initial.clone();
        return rsx! {
            Card { title: "Pickup Requested".to_string(),
                p { class: "success-message",
                    "Your pickup has been scheduled. The provider will confirm the collection window."
                }
                DetailList {
                    rows: vec![
                        ("Request".to_string(), pickup.id.clone()),
                        ("Scheduled Date".to_string(), format_date(&pickup.scheduled_date)),
                        ("Volume".to_string(), format_kg(pickup.volume_kg)),
                        ("Pickup Address".to_string(), pickup.pickup_address.clone()),
                        ("Status".to_string(), pickup.status.label().to_string()),
                    ],
                }
                div { class: "form-actions",
                    Link { to: Route::BusinessPickups {}, class: "button", "View My Pickups" }
                    button {
                        class: "button secondary",
                        onclick: move |_| {
                            form.set(reset.clone());
                            created.set(None);
                        },
                        "Request Another"
                    }
                }
            }
        };
    }

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Card {
            if let Some(err) = error_msg() {
                div { class: "error-panel", role: "alert", "{err}" }
            }

            form { class: "pickup-form", onsubmit: handle_submit,
                div { class: "form-grid",
                    div { class: "form-field",
                        label { r#for: "waste_type_id", "Waste Type" }
                        select {
                            class: "input",
                            id: "waste_type_id",
                            value: "{form.read().waste_type_id}",
                            onchange: move |e: FormEvent| form.write().waste_type_id = e.value(),
                            option { value: "", "Select waste type" }
                            for wt in options.waste_types.iter() {
                                option {
                                    value: "{wt.id}",
                                    selected: form.read().waste_type_id == wt.id,
                                    "{wt.select_label()}"
                                }
                            }
                        }
                        if let Some(err) = error_for("waste_type_id") {
                            div { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "volume_kg", "Estimated Volume (kg)" }
                        input {
                            class: "input",
                            id: "volume_kg",
                            r#type: "number",
                            min: "1",
                            step: "0.1",
                            placeholder: "e.g. 250",
                            value: "{form.read().volume_kg}",
                            oninput: move |e: FormEvent| form.write().volume_kg = e.value(),
                        }
                        if let Some(err) = error_for("volume_kg") {
                            div { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "provider_id", "Waste Provider" }
                        select {
                            class: "input",
                            id: "provider_id",
                            value: "{form.read().provider_id}",
                            onchange: move |e: FormEvent| form.write().provider_id = e.value(),
                            option { value: "", "Select provider" }
                            for provider in options.providers.iter() {
                                option {
                                    value: "{provider.id}",
                                    selected: form.read().provider_id == provider.id,
                                    "{provider.company_name}"
                                }
                            }
                        }
                        if let Some(err) = error_for("provider_id") {
                            div { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "scheduled_date", "Preferred Date" }
                        input {
                            class: "input",
                            id: "scheduled_date",
                            r#type: "date",
                            min: "{min_date}",
                            value: "{form.read().scheduled_date}",
                            oninput: move |e: FormEvent| form.write().scheduled_date = e.value(),
                        }
                        if let Some(err) = error_for("scheduled_date") {
                            div { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field wide",
                        label { r#for: "pickup_address", "Pickup Address" }
                        input {
                            class: "input",
                            id: "pickup_address",
                            value: "{form.read().pickup_address}",
                            oninput: move |e: FormEvent| form.write().pickup_address = e.value(),
                        }
                        if let Some(err) = error_for("pickup_address") {
                            div { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "city", "City" }
                        input {
                            class: "input",
                            id: "city",
                            value: "{form.read().city}",
                            oninput: move |e: FormEvent| form.write().city = e.value(),
                        }
                        if let Some(err) = error_for("city") {
                            div { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "state", "State" }
                        input {
                            class: "input",
                            id: "state",
                            value: "{form.read().state}",
                            oninput: move |e: FormEvent| form.write().state = e.value(),
                        }
                        if let Some(err) = error_for("state") {
                            div { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "postal_code", "Postal Code" }
                        input {
                            class: "input",
                            id: "postal_code",
                            value: "{form.read().postal_code}",
                            oninput: move |e: FormEvent| form.write().postal_code = e.value(),
                        }
                        if let Some(err) = error_for("postal_code") {
                            div { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field wide",
                        label { r#for: "notes", "Notes (optional)" }
                        textarea {
                            class: "input",
                            id: "notes",
                            rows: "3",
                            placeholder: "Access instructions, loading dock, container count...",
                            value: "{form.read().notes}",
                            oninput: move |e: FormEvent| form.write().notes = e.value(),
                        }
                    }
                }

                div { class: "form-actions",
                    Link { to: Route::BusinessPickups {}, class: "button secondary", "Cancel" }
                    button {
                        r#type: "submit",
                        class: "button",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Submit Request" }
                    }
                }
            }
        }
    }
}
