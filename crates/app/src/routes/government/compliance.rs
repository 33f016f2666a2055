use dioxus::prelude::*;
use shared_types::query::ReportFilter;

use crate::components::{
    report_status_options, EmptyState, ErrorPanel, FilterBar, LoadingPanel, PageHeader,
    ReportTable,
};

#[component]
pub fn GovernmentCompliance() -> Element {
    let search = use_signal(String::new);
    let status = use_signal(|| "all".to_string());

    let data = use_resource(move || {
        let filter = ReportFilter {
            status: Some(status()),
            search: Some(search()),
        };
        async move { server::api::list_compliance_reports(filter).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Compliance Reports",
                subtitle: "Disposal reports submitted by licensed providers".to_string(),
            }

            FilterBar {
                search,
                placeholder: "Search by title or provider...",
                status: Some(status),
                status_options: report_status_options(),
            }

            match &*data.read() {
                Some(Ok(reports)) if reports.is_empty() => rsx! {
                    EmptyState { message: "No reports match the current filters." }
                },
                Some(Ok(reports)) => rsx! {
                    ReportTable { reports: reports.clone(), show_provider: true }
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
