use dioxus::prelude::*;

use crate::components::{EmptyState, ErrorPanel, LoadingPanel, PageHeader, ReportTable};

#[component]
pub fn ProviderCompliance() -> Element {
    let data = use_resource(|| async move { server::api::get_provider_compliance().await });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Compliance",
                subtitle: "Disposal reports submitted to the regulator".to_string(),
            }

            match &*data.read() {
                Some(Ok(reports)) if reports.is_empty() => rsx! {
                    EmptyState { message: "No compliance reports submitted yet." }
                },
                Some(Ok(reports)) => rsx! {
                    ReportTable { reports: reports.clone(), show_provider: false }
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
