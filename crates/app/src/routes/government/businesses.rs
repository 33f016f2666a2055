use dioxus::prelude::*;

use crate::components::{
    Badge, BadgeTone, EmptyState, ErrorPanel, FilterBar, LoadingPanel, PageHeader,
};

fn search_term(input: String) -> Option<String> {
    Some(input).filter(|s| !s.trim().is_empty())
}

#[component]
pub fn GovernmentBusinesses() -> Element {
    let search = use_signal(String::new);

    let data = use_resource(move || {
        let term = search_term(search());
        async move { server::api::list_businesses(term).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Businesses",
                subtitle: "Registered waste producers".to_string(),
            }

            FilterBar { search, placeholder: "Search by name or contact person..." }

            match &*data.read() {
                Some(Ok(businesses)) if businesses.is_empty() => rsx! {
                    EmptyState { message: "No businesses match your search." }
                },
                Some(Ok(businesses)) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Type" }
                                th { "Contact" }
                                th { "Location" }
                                th { "Account" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for business in businesses.iter() {
                                tr { key: "{business.id}",
                                    td { "{business.name}" }
                                    td { "{business.business_type}" }
                                    td {
                                        div { "{business.contact_person}" }
                                        div { class: "muted", "{business.email}" }
                                    }
                                    td { "{business.city}, {business.state}" }
                                    td {
                                        if business.user_id.is_some() {
                                            "Linked"
                                        } else {
                                            span { class: "muted", "Unclaimed" }
                                        }
                                    }
                                    td {
                                        if business.verified {
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

#[cfg(test)]
mod tests {
    use super::search_term;

    #[test]
    fn blank_search_is_no_search() {
        assert_eq!(search_term(String::new()), None);
        assert_eq!(search_term("   ".into()), None);
        assert_eq!(search_term("doe".into()), Some("doe".to_string()));
    }
}
