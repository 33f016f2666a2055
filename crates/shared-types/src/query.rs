//! Data-filtering helpers over a [`Dataset`].
//!
//! Every page resolves "my" entity from the session user, narrows the pickup
//! collection by foreign key, then applies the optional status/search
//! predicates. All functions are pure; an unmatched id yields an empty list.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::compliance::{ComplianceReportView, ReportStatus};
use crate::dashboard::{
    BusinessDashboard, BusinessStats, CustomerSummary, GovernmentDashboard, GovernmentStats,
    ProviderActivity, ProviderDashboard, ProviderStats, StatusBreakdown, VolumeByWasteType,
};
use crate::dataset::Dataset;
use crate::fleet::{Fleet, RouteStatus, RouteView, TrackingOverview, VehicleStatus};
use crate::pickup::{PickupRequest, PickupStatus, PickupView};
use crate::waste::{Business, Provider, WasteProfileView};

/// Rows shown in "recent" dashboard panels.
pub const RECENT_LIMIT: usize = 5;

/// Which denormalized fields a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// Waste type, provider name, notes, address.
    Business,
    /// Waste type, business name, notes, address.
    Provider,
    /// All of the above.
    Government,
}

/// Optional status and search predicates for pickup lists.
///
/// `status` of `None`, `""` or `"all"` disables the status predicate; any
/// other value is compared exactly against the wire name of the status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct PickupFilter {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl PickupFilter {
    pub fn new(status: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            search: Some(search.into()),
        }
    }

    fn status_matches(&self, status: PickupStatus) -> bool {
        match self.status.as_deref().map(str::trim) {
            None | Some("") | Some("all") => true,
            Some(wanted) => status.as_str() == wanted,
        }
    }

    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Search and status predicates for the compliance registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct ReportFilter {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Free-text search over a registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn normalized(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// The business whose `user_id` equals the session user's id.
pub fn linked_business<'a>(data: &'a Dataset, user_id: &str) -> Option<&'a Business> {
    data.businesses
        .iter()
        .find(|b| b.user_id.as_deref() == Some(user_id))
}

/// The provider whose `user_id` equals the session user's id.
pub fn linked_provider<'a>(data: &'a Dataset, user_id: &str) -> Option<&'a Provider> {
    data.providers
        .iter()
        .find(|p| p.user_id.as_deref() == Some(user_id))
}

pub fn pickups_for_business<'a>(data: &'a Dataset, business_id: &str) -> Vec<&'a PickupRequest> {
    data.pickups
        .iter()
        .filter(|p| p.business_id == business_id)
        .collect()
}

pub fn pickups_for_provider<'a>(data: &'a Dataset, provider_id: &str) -> Vec<&'a PickupRequest> {
    data.pickups
        .iter()
        .filter(|p| p.provider_id == provider_id)
        .collect()
}

/// Whether `pickup` passes `filter` when searched from `perspective`.
pub fn matches(
    data: &Dataset,
    pickup: &PickupRequest,
    filter: &PickupFilter,
    perspective: Perspective,
) -> bool {
    if !filter.status_matches(pickup.status) {
        return false;
    }
    let Some(needle) = filter.needle() else {
        return true;
    };

    // Dangling references search as empty text, never as their placeholder.
    let waste_type = data
        .waste_type(&pickup.waste_type_id)
        .map(|w| w.name.as_str())
        .unwrap_or("");
    let provider = data
        .provider(&pickup.provider_id)
        .map(|p| p.company_name.as_str())
        .unwrap_or("");
    let business = data
        .business(&pickup.business_id)
        .map(|b| b.name.as_str())
        .unwrap_or("");

    let common = contains(waste_type, &needle)
        || contains(&pickup.notes, &needle)
        || contains(&pickup.pickup_address, &needle);
    if common {
        return true;
    }
    match perspective {
        Perspective::Business => contains(provider, &needle),
        Perspective::Provider => contains(business, &needle),
        Perspective::Government => contains(provider, &needle) || contains(business, &needle),
    }
}

/// Apply `filter` and resolve the survivors to display rows, newest first.
pub fn filter_pickups<'a>(
    data: &Dataset,
    pickups: impl IntoIterator<Item = &'a PickupRequest>,
    filter: &PickupFilter,
    perspective: Perspective,
) -> Vec<PickupView> {
    let mut rows: Vec<&PickupRequest> = pickups
        .into_iter()
        .filter(|p| matches(data, p, filter, perspective))
        .collect();
    rows.sort_by(|a, b| b.scheduled_date.cmp(&a.scheduled_date));
    rows.into_iter().map(|p| data.view(p)).collect()
}

pub fn business_stats<'a>(pickups: impl IntoIterator<Item = &'a PickupRequest>) -> BusinessStats {
    let mut stats = BusinessStats::default();
    for pickup in pickups {
        match pickup.status {
            PickupStatus::Completed => {
                stats.completed += 1;
                stats.total_waste_disposed_kg += pickup.volume_kg;
            }
            PickupStatus::Scheduled => stats.scheduled += 1,
            PickupStatus::InProgress => stats.in_progress += 1,
            PickupStatus::Cancelled => {}
        }
    }
    stats
}

/// Provider pickup statistics; fleet counts are filled in by the caller.
pub fn provider_stats<'a>(pickups: impl IntoIterator<Item = &'a PickupRequest>) -> ProviderStats {
    let mut stats = ProviderStats::default();
    let mut businesses = HashSet::new();
    for pickup in pickups {
        stats.total_pickups += 1;
        businesses.insert(pickup.business_id.as_str());
        match pickup.status {
            PickupStatus::Completed => {
                stats.completed += 1;
                stats.total_waste_collected_kg += pickup.volume_kg;
            }
            PickupStatus::InProgress => {
                stats.in_progress += 1;
                stats.total_waste_collected_kg += pickup.volume_kg;
            }
            PickupStatus::Scheduled => stats.pending += 1,
            PickupStatus::Cancelled => {}
        }
    }
    stats.businesses_served = businesses.len();
    stats
}

pub fn fleet_for_provider(data: &Dataset, provider_id: &str) -> Fleet {
    Fleet {
        vehicles: data
            .vehicles
            .iter()
            .filter(|v| v.provider_id == provider_id)
            .cloned()
            .collect(),
        drivers: data
            .drivers
            .iter()
            .filter(|d| d.provider_id == provider_id)
            .cloned()
            .collect(),
    }
}

/// Distinct businesses in a provider's pickups, ordered by name.
///
/// Search matches business name or contact person. Pickups whose business
/// no longer exists are skipped.
pub fn customers_for_provider(
    data: &Dataset,
    provider_id: &str,
    search: Option<&str>,
) -> Vec<CustomerSummary> {
    let needle = normalized(search);
    let mut totals: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for pickup in pickups_for_provider(data, provider_id) {
        let entry = totals.entry(pickup.business_id.as_str()).or_default();
        entry.0 += 1;
        if pickup.status != PickupStatus::Cancelled {
            entry.1 += pickup.volume_kg;
        }
    }

    let mut rows: Vec<CustomerSummary> = totals
        .into_iter()
        .filter_map(|(business_id, (total_pickups, waste_volume_kg))| {
            let business = data.business(business_id)?;
            Some(CustomerSummary {
                business: business.clone(),
                total_pickups,
                waste_volume_kg,
            })
        })
        .filter(|row| match &needle {
            None => true,
            Some(n) => contains(&row.business.name, n) || contains(&row.business.contact_person, n),
        })
        .collect();
    rows.sort_by(|a, b| a.business.name.cmp(&b.business.name));
    rows
}

/// Dispatched pickups grouped by driver and vehicle, plus fleet counts.
///
/// Only non-cancelled pickups with tracking details form routes. A route is
/// completed once every pickup on it is, in progress while any pickup is
/// underway, scheduled otherwise.
pub fn tracking_for_provider(data: &Dataset, provider_id: &str) -> TrackingOverview {
    let fleet = fleet_for_provider(data, provider_id);

    let mut groups: BTreeMap<(&str, &str), Vec<&PickupRequest>> = BTreeMap::new();
    for pickup in pickups_for_provider(data, provider_id) {
        if pickup.status == PickupStatus::Cancelled {
            continue;
        }
        if let Some(tracking) = &pickup.tracking {
            groups
                .entry((
                    tracking.assigned_driver.as_str(),
                    tracking.assigned_vehicle.as_str(),
                ))
                .or_default()
                .push(pickup);
        }
    }

    let routes: Vec<RouteView> = groups
        .into_iter()
        .map(|((driver, vehicle), pickups)| {
            let pickups_completed = pickups
                .iter()
                .filter(|p| p.status == PickupStatus::Completed)
                .count();
            let status = if pickups_completed == pickups.len() {
                RouteStatus::Completed
            } else if pickups.iter().any(|p| p.status == PickupStatus::InProgress) {
                RouteStatus::InProgress
            } else {
                RouteStatus::Scheduled
            };
            RouteView {
                driver: driver.to_string(),
                vehicle: vehicle.to_string(),
                driver_status: fleet
                    .drivers
                    .iter()
                    .find(|d| d.name == driver)
                    .map(|d| d.status),
                vehicle_status: fleet
                    .vehicles
                    .iter()
                    .find(|v| v.vehicle_number == vehicle)
                    .map(|v| v.status),
                pickups_planned: pickups.len(),
                pickups_completed,
                next_arrival: pickups
                    .iter()
                    .filter(|p| p.status != PickupStatus::Completed)
                    .filter_map(|p| p.tracking.as_ref()?.estimated_arrival)
                    .min(),
                status,
            }
        })
        .collect();

    TrackingOverview {
        active_routes: routes
            .iter()
            .filter(|r| r.status == RouteStatus::InProgress)
            .count(),
        vehicles: fleet.vehicles.len(),
        vehicles_active: fleet
            .vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Active)
            .count(),
        drivers_on_duty: fleet.drivers_on_duty(),
        routes,
    }
}

pub fn business_dashboard(data: &Dataset, business: &Business) -> BusinessDashboard {
    let pickups = pickups_for_business(data, &business.id);
    let stats = business_stats(pickups.iter().copied());

    let mut recent = pickups;
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    BusinessDashboard {
        business: business.clone(),
        stats,
        recent_pickups: recent
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|p| data.view(p))
            .collect(),
    }
}

pub fn provider_dashboard(data: &Dataset, provider: &Provider) -> ProviderDashboard {
    let pickups = pickups_for_provider(data, &provider.id);
    let fleet = fleet_for_provider(data, &provider.id);

    let mut stats = provider_stats(pickups.iter().copied());
    stats.vehicles = fleet.vehicles.len();
    stats.drivers = fleet.drivers.len();

    let mut upcoming: Vec<&PickupRequest> = pickups
        .into_iter()
        .filter(|p| p.status.is_upcoming())
        .collect();
    upcoming.sort_by(|a, b| a.scheduled_date.cmp(&b.scheduled_date));
    ProviderDashboard {
        provider: provider.clone(),
        stats,
        upcoming_pickups: upcoming.into_iter().map(|p| data.view(p)).collect(),
    }
}

pub fn government_stats(data: &Dataset) -> GovernmentStats {
    GovernmentStats {
        total_businesses: data.businesses.len(),
        total_providers: data.providers.len(),
        total_pickups: data.pickups.len(),
        pending_reports: data
            .compliance_reports
            .iter()
            .filter(|r| r.status == ReportStatus::UnderReview)
            .count(),
        compliance_rate: data.analytics.compliance_rate,
        total_waste_collected: data.analytics.total_waste_collected,
    }
}

pub fn government_dashboard(data: &Dataset) -> GovernmentDashboard {
    let mut reports: Vec<_> = data.compliance_reports.iter().collect();
    reports.sort_by(|a, b| b.submitted_date.cmp(&a.submitted_date));
    GovernmentDashboard {
        stats: government_stats(data),
        recent_reports: reports
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|r| data.report_view(r))
            .collect(),
    }
}

/// Businesses whose name or contact person contains the search term.
pub fn search_businesses<'a>(data: &'a Dataset, search: Option<&str>) -> Vec<&'a Business> {
    let needle = normalized(search);
    data.businesses
        .iter()
        .filter(|b| match &needle {
            None => true,
            Some(n) => contains(&b.name, n) || contains(&b.contact_person, n),
        })
        .collect()
}

/// Providers whose company name or contact person contains the search term.
pub fn search_providers<'a>(data: &'a Dataset, search: Option<&str>) -> Vec<&'a Provider> {
    let needle = normalized(search);
    data.providers
        .iter()
        .filter(|p| match &needle {
            None => true,
            Some(n) => contains(&p.company_name, n) || contains(&p.contact_person, n),
        })
        .collect()
}

/// Compliance reports matched on title or provider name, newest first.
pub fn filter_reports(data: &Dataset, filter: &ReportFilter) -> Vec<ComplianceReportView> {
    let needle = normalized(filter.search.as_deref());
    let status = filter.status.as_deref().map(str::trim);
    let mut rows: Vec<ComplianceReportView> = data
        .compliance_reports
        .iter()
        .filter(|r| match status {
            None | Some("") | Some("all") => true,
            Some(wanted) => r.status.as_str() == wanted,
        })
        .map(|r| data.report_view(r))
        .filter(|view| match &needle {
            None => true,
            Some(n) => contains(&view.report.title, n) || contains(&view.provider_name, n),
        })
        .collect();
    rows.sort_by(|a, b| b.report.submitted_date.cmp(&a.report.submitted_date));
    rows
}

pub fn reports_for_provider(data: &Dataset, provider_id: &str) -> Vec<ComplianceReportView> {
    let mut rows: Vec<ComplianceReportView> = data
        .compliance_reports
        .iter()
        .filter(|r| r.provider_id == provider_id)
        .map(|r| data.report_view(r))
        .collect();
    rows.sort_by(|a, b| b.report.submitted_date.cmp(&a.report.submitted_date));
    rows
}

pub fn waste_profiles(data: &Dataset, business: &Business) -> Vec<WasteProfileView> {
    business
        .waste_profiles
        .iter()
        .map(|profile| {
            let waste_type = data.waste_type(&profile.waste_type_id);
            WasteProfileView {
                profile: profile.clone(),
                waste_type_name: data.waste_type_name(&profile.waste_type_id).to_string(),
                hazardous: waste_type.map(|w| w.hazardous).unwrap_or(false),
            }
        })
        .collect()
}

/// Non-cancelled volume per waste type, ordered by name.
pub fn volume_by_waste_type<'a>(
    data: &Dataset,
    pickups: impl IntoIterator<Item = &'a PickupRequest>,
) -> Vec<VolumeByWasteType> {
    let mut totals: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for pickup in pickups {
        if pickup.status == PickupStatus::Cancelled {
            continue;
        }
        let entry = totals
            .entry(data.waste_type_name(&pickup.waste_type_id).to_string())
            .or_default();
        entry.0 += 1;
        entry.1 += pickup.volume_kg;
    }
    totals
        .into_iter()
        .map(|(waste_type_name, (pickups, volume_kg))| VolumeByWasteType {
            waste_type_name,
            pickups,
            volume_kg,
        })
        .collect()
}

/// Pickup count and volume for every status, including empty ones.
pub fn status_breakdown<'a>(
    pickups: impl IntoIterator<Item = &'a PickupRequest>,
) -> Vec<StatusBreakdown> {
    let mut rows: Vec<StatusBreakdown> = PickupStatus::ALL
        .into_iter()
        .map(|status| StatusBreakdown {
            status,
            pickups: 0,
            volume_kg: 0.0,
        })
        .collect();
    for pickup in pickups {
        if let Some(row) = rows.iter_mut().find(|r| r.status == pickup.status) {
            row.pickups += 1;
            row.volume_kg += pickup.volume_kg;
        }
    }
    rows
}

/// Pickup activity per registered provider.
pub fn provider_activity(data: &Dataset) -> Vec<ProviderActivity> {
    data.providers
        .iter()
        .map(|provider| {
            let pickups = pickups_for_provider(data, &provider.id);
            ProviderActivity {
                provider_id: provider.id.clone(),
                provider_name: provider.company_name.clone(),
                pickups: pickups.len(),
                completed: pickups
                    .iter()
                    .filter(|p| p.status == PickupStatus::Completed)
                    .count(),
                volume_kg: pickups
                    .iter()
                    .filter(|p| p.status != PickupStatus::Cancelled)
                    .map(|p| p.volume_kg)
                    .sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::*;
    use pretty_assertions::assert_eq;

    fn ids(rows: &[PickupView]) -> Vec<&str> {
        rows.iter().map(|r| r.pickup.id.as_str()).collect()
    }

    #[test]
    fn linked_entities_match_on_user_id() {
        let data = dataset();
        assert_eq!(linked_business(&data, BUSINESS_USER).unwrap().id, "biz-green");
        assert_eq!(linked_provider(&data, PROVIDER_USER).unwrap().id, "prov-eco");
        assert!(linked_business(&data, PROVIDER_USER).is_none());
        assert!(linked_provider(&data, "").is_none());
    }

    #[test]
    fn unknown_business_yields_empty_list() {
        let data = dataset();
        assert!(pickups_for_business(&data, "no-such-business").is_empty());
        let rows = filter_pickups(
            &data,
            pickups_for_business(&data, "no-such-business"),
            &PickupFilter::default(),
            Perspective::Business,
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn business_pickups_are_scoped_by_foreign_key() {
        let data = dataset();
        let mine = pickups_for_business(&data, "biz-green");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|p| p.business_id == "biz-green"));
    }

    #[test]
    fn status_all_disables_status_predicate() {
        let data = dataset();
        let rows = filter_pickups(
            &data,
            &data.pickups,
            &PickupFilter::new("all", ""),
            Perspective::Government,
        );
        assert_eq!(rows.len(), data.pickups.len());
    }

    #[test]
    fn status_filter_is_exact() {
        let data = dataset();
        let rows = filter_pickups(
            &data,
            &data.pickups,
            &PickupFilter::new("in_progress", ""),
            Perspective::Government,
        );
        let mut got = ids(&rows);
        got.sort();
        assert_eq!(got, vec!["p3", "p4"]);

        let none = filter_pickups(
            &data,
            &data.pickups,
            &PickupFilter::new("bogus", ""),
            Perspective::Government,
        );
        assert!(none.is_empty());
    }

    #[test]
    fn business_search_covers_provider_not_business() {
        let data = dataset();
        let mine = pickups_for_business(&data, "biz-green");

        let by_provider = filter_pickups(
            &data,
            mine.iter().copied(),
            &PickupFilter::new("all", "ECOWASTE"),
            Perspective::Business,
        );
        assert_eq!(by_provider.len(), 2);

        let by_own_name = filter_pickups(
            &data,
            mine.iter().copied(),
            &PickupFilter::new("all", "green solutions"),
            Perspective::Business,
        );
        assert!(by_own_name.is_empty());
    }

    #[test]
    fn provider_search_covers_business_name() {
        let data = dataset();
        let assigned = pickups_for_provider(&data, "prov-eco");
        let rows = filter_pickups(
            &data,
            assigned,
            &PickupFilter::new("all", "tech innovators"),
            Perspective::Provider,
        );
        assert_eq!(ids(&rows), vec!["p4"]);
    }

    #[test]
    fn search_matches_waste_type_notes_and_address() {
        let data = dataset();
        let search = |term: &str| {
            let rows = filter_pickups(
                &data,
                &data.pickups,
                &PickupFilter::new("all", term),
                Perspective::Business,
            );
            let mut got: Vec<String> = rows.into_iter().map(|r| r.pickup.id).collect();
            got.sort();
            got
        };
        assert_eq!(search("paper"), vec!["p2"]);
        assert_eq!(search("loading dock"), vec!["p1"]);
        assert_eq!(search("tech avenue"), vec!["p3", "p4"]);
    }

    #[test]
    fn placeholder_names_are_not_searchable() {
        let data = dataset();
        for perspective in [
            Perspective::Business,
            Perspective::Provider,
            Perspective::Government,
        ] {
            let rows = filter_pickups(
                &data,
                &data.pickups,
                &PickupFilter::new("all", "  unknown "),
                perspective,
            );
            assert!(rows.is_empty(), "{perspective:?}: {:?}", ids(&rows));
        }

        // The orphan still displays its placeholder.
        let rows = filter_pickups(
            &data,
            &data.pickups,
            &PickupFilter::new("all", "tech avenue"),
            Perspective::Provider,
        );
        let orphan = rows.iter().find(|r| r.pickup.id == "p4").unwrap();
        assert_eq!(orphan.waste_type_name, "Unknown");
    }

    #[test]
    fn business_stats_sum_completed_volume() {
        let data = dataset();
        let stats = business_stats(pickups_for_business(&data, "biz-green"));
        assert_eq!(
            stats,
            BusinessStats {
                completed: 1,
                scheduled: 1,
                in_progress: 0,
                total_waste_disposed_kg: 100.0,
            }
        );
    }

    #[test]
    fn provider_dashboard_counts() {
        let data = dataset();
        let provider = linked_provider(&data, PROVIDER_USER).unwrap();
        let dash = provider_dashboard(&data, provider);

        assert_eq!(dash.stats.total_pickups, 3);
        assert_eq!(dash.stats.completed, 1);
        assert_eq!(dash.stats.pending, 1);
        assert_eq!(dash.stats.in_progress, 1);
        assert_eq!(dash.stats.total_waste_collected_kg, 130.0);
        assert_eq!(dash.stats.businesses_served, 2);
        assert_eq!(dash.stats.vehicles, 1);
        assert_eq!(dash.stats.drivers, 0);
        assert_eq!(ids(&dash.upcoming_pickups).len(), 2);
        assert!(dash
            .upcoming_pickups
            .iter()
            .all(|p| p.pickup.status.is_upcoming()));
    }

    #[test]
    fn business_dashboard_lists_only_own_pickups() {
        let data = dataset();
        let business = linked_business(&data, BUSINESS_USER).unwrap();
        let dash = business_dashboard(&data, business);
        assert_eq!(dash.business.name, "Green Solutions Inc.");
        assert!(dash
            .recent_pickups
            .iter()
            .all(|p| p.pickup.business_id == "biz-green"));
        assert_eq!(dash.recent_pickups.len(), 2);
    }

    #[test]
    fn government_dashboard_counts_pending_reports() {
        let data = dataset();
        let dash = government_dashboard(&data);
        assert_eq!(dash.stats.total_businesses, 2);
        assert_eq!(dash.stats.total_providers, 2);
        assert_eq!(dash.stats.total_pickups, 4);
        assert_eq!(dash.stats.pending_reports, 1);
        assert_eq!(dash.stats.compliance_rate, 94.5);
        assert_eq!(dash.recent_reports.len(), 3);
        assert_eq!(dash.recent_reports[0].provider_name, "EcoWaste Solutions");
    }

    #[test]
    fn registry_search_is_case_insensitive() {
        let data = dataset();
        assert_eq!(search_businesses(&data, Some("TECH")).len(), 1);
        assert_eq!(search_businesses(&data, Some("jane")).len(), 2);
        assert_eq!(search_businesses(&data, None).len(), 2);
        assert_eq!(search_providers(&data, Some("cleanearth")).len(), 1);
        assert_eq!(search_providers(&data, Some("   ")).len(), 2);
    }

    #[test]
    fn report_filter_by_status_and_provider_name() {
        let data = dataset();
        let pending = filter_reports(
            &data,
            &ReportFilter {
                status: Some("under_review".into()),
                search: None,
            },
        );
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].report.id, "r3");

        let clean = filter_reports(
            &data,
            &ReportFilter {
                status: None,
                search: Some("cleanearth".into()),
            },
        );
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].report.id, "r2");
    }

    #[test]
    fn volume_by_waste_type_groups_and_names_unknowns() {
        let data = dataset();
        let rows = volume_by_waste_type(&data, &data.pickups);
        let names: Vec<&str> = rows.iter().map(|r| r.waste_type_name.as_str()).collect();
        assert_eq!(names, vec!["Electronic", "Paper", "Plastic", "Unknown"]);
        assert_eq!(rows[2].volume_kg, 200.0);
    }

    #[test]
    fn status_breakdown_includes_empty_statuses() {
        let data = dataset();
        let rows = status_breakdown(pickups_for_provider(&data, "prov-clean"));
        assert_eq!(rows.len(), 4);
        let in_progress = rows
            .iter()
            .find(|r| r.status == PickupStatus::InProgress)
            .unwrap();
        assert_eq!(in_progress.pickups, 1);
        assert_eq!(in_progress.volume_kg, 50.0);
        let cancelled = rows
            .iter()
            .find(|r| r.status == PickupStatus::Cancelled)
            .unwrap();
        assert_eq!(cancelled.pickups, 0);
    }

    #[test]
    fn provider_activity_covers_every_provider() {
        let data = dataset();
        let rows = provider_activity(&data);
        assert_eq!(rows.len(), 2);
        let eco = rows.iter().find(|r| r.provider_id == "prov-eco").unwrap();
        assert_eq!(eco.pickups, 3);
        assert_eq!(eco.completed, 1);
        assert_eq!(eco.volume_kg, 330.0);
    }

    #[test]
    fn waste_profiles_resolve_types() {
        let data = dataset();
        let business = data.business("biz-green").unwrap();
        let profiles = waste_profiles(&data, business);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].waste_type_name, "Plastic");
        assert!(!profiles[0].hazardous);
    }

    #[test]
    fn customers_are_distinct_businesses_of_the_provider() {
        let mut data = dataset();
        data.pickups.push(pickup(
            "p5",
            "biz-green",
            "prov-eco",
            "wt-plastic",
            PickupStatus::Cancelled,
            999.0,
            "",
            "123 Green Street",
        ));
        data.pickups.push(pickup(
            "p6",
            "biz-gone",
            "prov-eco",
            "wt-plastic",
            PickupStatus::Completed,
            10.0,
            "",
            "",
        ));

        let rows = customers_for_provider(&data, "prov-eco", None);
        let names: Vec<&str> = rows.iter().map(|r| r.business.name.as_str()).collect();
        assert_eq!(names, vec!["Green Solutions Inc.", "Tech Innovators Ltd."]);
        assert_eq!(rows[0].total_pickups, 3);
        assert_eq!(rows[0].waste_volume_kg, 300.0);
        assert_eq!(rows[1].total_pickups, 1);
        assert_eq!(rows[1].waste_volume_kg, 30.0);

        let clean = customers_for_provider(&data, "prov-clean", None);
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].business.id, "biz-tech");
        assert!(customers_for_provider(&data, "no-such-provider", None).is_empty());
    }

    #[test]
    fn customer_search_covers_name_and_contact_person() {
        let data = dataset();
        let search = |term: &str| customers_for_provider(&data, "prov-eco", Some(term)).len();
        assert_eq!(search("TECH"), 1);
        assert_eq!(search("jane smith"), 2);
        assert_eq!(search("   "), 2);
        assert_eq!(search("ecowaste"), 0);
    }

    #[test]
    fn tracking_groups_dispatched_pickups_by_driver_and_vehicle() {
        use crate::fleet::{Driver, DriverStatus};
        use crate::pickup::TrackingDetails;

        let dispatch = |driver: &str, vehicle: &str, eta: &str| TrackingDetails {
            assigned_vehicle: vehicle.into(),
            assigned_driver: driver.into(),
            estimated_arrival: Some(ts(eta)),
            actual_pickup_time: None,
            disposal_completion_time: None,
            current_status: "assigned".into(),
        };

        let mut data = dataset();
        data.drivers.push(Driver {
            id: "d2".into(),
            provider_id: "prov-eco".into(),
            name: "Michael Brown".into(),
            license_number: "DL-12345".into(),
            phone: "555-111-2222".into(),
            email: "michael@ecowaste.example.com".into(),
            status: DriverStatus::OnDuty,
        });
        for p in data.pickups.iter_mut() {
            p.tracking = match p.id.as_str() {
                "p1" => Some(dispatch("Michael Brown", "ECO-TRUCK-01", "2025-03-02T10:30:00Z")),
                "p2" => Some(dispatch("Sarah Wilson", "ECO-TRUCK-03", "2025-02-15T13:15:00Z")),
                "p4" => Some(dispatch("Michael Brown", "ECO-TRUCK-01", "2025-03-01T09:00:00Z")),
                _ => None,
            };
        }
        let mut cancelled = pickup(
            "p5",
            "biz-green",
            "prov-eco",
            "wt-plastic",
            PickupStatus::Cancelled,
            10.0,
            "",
            "",
        );
        cancelled.tracking = Some(dispatch("Ghost Driver", "ECO-TRUCK-09", "2025-03-03T08:00:00Z"));
        data.pickups.push(cancelled);

        let overview = tracking_for_provider(&data, "prov-eco");
        assert_eq!(overview.routes.len(), 2);

        let michael = &overview.routes[0];
        assert_eq!(michael.driver, "Michael Brown");
        assert_eq!(michael.pickups_planned, 2);
        assert_eq!(michael.pickups_completed, 0);
        assert_eq!(michael.status, RouteStatus::InProgress);
        assert_eq!(michael.next_arrival, Some(ts("2025-03-01T09:00:00Z")));
        assert_eq!(michael.driver_status, Some(DriverStatus::OnDuty));
        assert_eq!(michael.vehicle_status, Some(VehicleStatus::Active));

        let sarah = &overview.routes[1];
        assert_eq!(sarah.status, RouteStatus::Completed);
        assert_eq!((sarah.pickups_completed, sarah.pickups_planned), (1, 1));
        assert_eq!(sarah.next_arrival, None);
        assert_eq!(sarah.driver_status, None);
        assert_eq!(sarah.vehicle_status, None);

        assert_eq!(overview.active_routes, 1);
        assert_eq!(overview.vehicles, 1);
        assert_eq!(overview.vehicles_active, 1);
        assert_eq!(overview.drivers_on_duty, 1);
    }

    #[test]
    fn tracking_without_dispatches_has_no_routes() {
        let data = dataset();
        let overview = tracking_for_provider(&data, "prov-clean");
        assert!(overview.routes.is_empty());
        assert_eq!(overview.active_routes, 0);
        assert_eq!(overview.vehicles, 0);
        assert_eq!(overview.drivers_on_duty, 1);
    }
}
