use dioxus::prelude::*;
use shared_types::CustomerSummary;

use crate::components::{EmptyState, ErrorPanel, FilterBar, LoadingPanel, PageHeader, StatCard};
use crate::format_helpers::format_kg;

fn search_term(input: String) -> Option<String> {
    Some(input).filter(|s| !s.trim().is_empty())
}

/// Pickups and volume summed over every listed customer.
fn totals(customers: &[CustomerSummary]) -> (usize, f64) {
    customers.iter().fold((0, 0.0), |(pickups, volume), c| {
        (pickups + c.total_pickups, volume + c.waste_volume_kg)
    })
}

#[component]
pub fn ProviderCustomers() -> Element {
    let search = use_signal(String::new);

    let data = use_resource(move || {
        let term = search_term(search());
        async move { server::api::list_provider_customers(term).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Customers",
                subtitle: "Businesses your company collects from".to_string(),
            }

            FilterBar { search, placeholder: "Search by name or contact person..." }

            match &*data.read() {
                Some(Ok(customers)) if customers.is_empty() => rsx! {
                    EmptyState { message: "No customers match your search." }
                },
                Some(Ok(customers)) => {
                    let (pickups, volume) = totals(customers);
                    rsx! {
                        div { class: "stat-grid",
                            StatCard { label: "Customers", value: customers.len().to_string() }
                            StatCard { label: "Pickups", value: pickups.to_string() }
                            StatCard { label: "Waste Volume", value: format_kg(volume) }
                        }

                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Business" }
                                    th { "Type" }
                                    th { "Contact" }
                                    th { "Location" }
                                    th { "Pickups" }
                                    th { "Waste Volume" }
                                }
                            }
                            tbody {
                                for row in customers.iter() {
                                    tr { key: "{row.business.id}",
                                        td { "{row.business.name}" }
                                        td { "{row.business.business_type}" }
                                        td {
                                            div { "{row.business.contact_person}" }
                                            div { class: "muted", "{row.business.phone}" }
                                        }
                                        td { "{row.business.city}, {row.business.state}" }
                                        td { "{row.total_pickups}" }
                                        td { "{format_kg(row.waste_volume_kg)}" }
                                    }
                                }
                            }
                        }
                    }
                }
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
