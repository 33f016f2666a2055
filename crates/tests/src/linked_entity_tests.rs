//! Resolving the business or provider record behind a session user.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{query, BusinessDashboard, BusinessStats, ProviderDashboard};

use crate::common::{self, Auth, BUSINESS, ECO_WASTE, GREEN_SOLUTIONS, PROVIDER, TECH_INNOVATORS};

const BUSINESS_USER: &str = "bd8f33c5-9e45-4b9e-a91a-4ac5e2b53c5f";
const PROVIDER_USER: &str = "7e9b1b9e-9b1b-4b9e-9b1b-9b1b9b1b9b1b";
const GOVERNMENT_USER: &str = "6e1c7d4e-8f2a-4b9c-9d1e-3f5a2b1c7d4e";

#[test]
fn users_resolve_to_their_own_records() {
    let (_app, store) = common::test_app();

    store
        .read(|data| {
            let business = query::linked_business(data, BUSINESS_USER).unwrap();
            assert_eq!(business.id, GREEN_SOLUTIONS);
            assert_eq!(business.name, "Green Solutions Inc.");

            let provider = query::linked_provider(data, PROVIDER_USER).unwrap();
            assert_eq!(provider.id, ECO_WASTE);

            // Roles do not cross over, and government links to neither.
            assert!(query::linked_provider(data, BUSINESS_USER).is_none());
            assert!(query::linked_business(data, PROVIDER_USER).is_none());
            assert!(query::linked_business(data, GOVERNMENT_USER).is_none());
            assert!(query::linked_provider(data, GOVERNMENT_USER).is_none());
        })
        .unwrap();
}

#[test]
fn unlinked_records_are_never_matched() {
    let (_app, store) = common::test_app();

    store
        .read(|data| {
            let tech = data
                .businesses
                .iter()
                .find(|b| b.id == TECH_INNOVATORS)
                .unwrap();
            assert!(tech.user_id.is_none());
            assert!(query::linked_business(data, "").is_none());

            // Its pickups still exist for oversight.
            assert_eq!(query::pickups_for_business(data, TECH_INNOVATORS).len(), 1);
            assert!(query::pickups_for_business(data, "no-such-business").is_empty());
        })
        .unwrap();
}

#[tokio::test]
async fn business_dashboard_matches_its_linked_pickups() {
    let (app, store) = common::test_app();
    let token = common::token(&app, BUSINESS).await;

    let reply = common::get(&app, "/api/business/dashboard", Auth::Bearer(&token)).await;
    assert_eq!(reply.status, StatusCode::OK);
    let dashboard: BusinessDashboard = reply.parse();
    assert_eq!(dashboard.business.id, GREEN_SOLUTIONS);

    let expected = store
        .read(|data| query::business_stats(query::pickups_for_business(data, GREEN_SOLUTIONS)))
        .unwrap();
    assert_eq!(dashboard.stats, expected);
    assert_eq!(
        dashboard.stats,
        BusinessStats {
            completed: 1,
            scheduled: 1,
            in_progress: 0,
            total_waste_disposed_kg: 100.0,
        }
    );
    assert!(dashboard
        .recent_pickups
        .iter()
        .all(|row| row.pickup.business_id == GREEN_SOLUTIONS));
}

#[tokio::test]
async fn provider_dashboard_counts_only_assigned_pickups() {
    let (app, store) = common::test_app();
    let token = common::token(&app, PROVIDER).await;

    let reply = common::get(&app, "/api/provider/dashboard", Auth::Bearer(&token)).await;
    let dashboard: ProviderDashboard = reply.parse();
    assert_eq!(dashboard.provider.id, ECO_WASTE);

    let assigned = store
        .read(|data| query::pickups_for_provider(data, ECO_WASTE).len())
        .unwrap();
    assert_eq!(dashboard.stats.total_pickups, assigned);
    assert_eq!(dashboard.stats.businesses_served, 1);

    let reply = common::get(&app, "/api/provider/pickups", Auth::Bearer(&token)).await;
    let rows: Vec<shared_types::PickupView> = reply.parse();
    assert_eq!(rows.len(), assigned);
    assert!(rows.iter().all(|row| row.provider_name == "EcoWaste Solutions"));
}
