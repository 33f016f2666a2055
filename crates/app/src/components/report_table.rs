use dioxus::prelude::*;
use shared_types::ComplianceReportView;

use super::ReportStatusBadge;
use crate::format_helpers::{format_date, format_kg, format_snake_case_title};

/// `Recycled 520 kg, Landfill 70 kg` style summary of disposal methods.
pub fn disposal_summary(view: &ComplianceReportView) -> String {
    view.report
        .disposal_methods
        .iter()
        .map(|(method, kg)| format!("{} {}", format_snake_case_title(method), format_kg(*kg)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compliance reports with review state.
#[component]
pub fn ReportTable(reports: Vec<ComplianceReportView>, show_provider: bool) -> Element {
    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "Report" }
                    if show_provider {
                        th { "Provider" }
                    }
                    th { "Period" }
                    th { "Submitted" }
                    th { "Volume" }
                    th { "Disposal" }
                    th { "Status" }
                    th { "Review" }
                }
            }
            tbody {
                for view in reports {
                    tr { key: "{view.report.id}",
                        td { "{view.report.title}" }
                        if show_provider {
                            td { "{view.provider_name}" }
                        }
                        td { "{view.report.report_period}" }
                        td { "{format_date(&view.report.submitted_date)}" }
                        td { "{format_kg(view.report.waste_volume)}" }
                        td { "{disposal_summary(&view)}" }
                        td { ReportStatusBadge { status: view.report.status } }
                        td {
                            if let Some(approver) = view.report.approved_by.as_ref() {
                                span { class: "muted", "Approved by {approver}" }
                            }
                            if !view.report.review_notes.is_empty() {
                                p { class: "review-notes", "{view.report.review_notes}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
