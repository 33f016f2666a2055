//! Every role surface answers only its own role.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{self, Auth, BUSINESS, GOVERNMENT, PROVIDER};

const BUSINESS_SURFACE: &[&str] = &[
    "/api/business/dashboard",
    "/api/business/pickups",
    "/api/business/pickups/1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d",
    "/api/business/pickup-form",
    "/api/business/waste-profiles",
    "/api/business/reports",
    "/api/business/profile",
];

const PROVIDER_SURFACE: &[&str] = &[
    "/api/provider/dashboard",
    "/api/provider/pickups",
    "/api/provider/fleet",
    "/api/provider/customers",
    "/api/provider/tracking",
    "/api/provider/compliance",
    "/api/provider/reports",
    "/api/provider/profile",
];

const GOVERNMENT_SURFACE: &[&str] = &[
    "/api/government/dashboard",
    "/api/government/businesses",
    "/api/government/providers",
    "/api/government/compliance",
    "/api/government/analytics",
    "/api/government/reports",
];

#[tokio::test]
async fn each_role_reaches_only_its_own_surface() {
    let (app, _store) = common::test_app();

    let accounts = [("business", BUSINESS), ("provider", PROVIDER), ("government", GOVERNMENT)];
    let surfaces = [BUSINESS_SURFACE, PROVIDER_SURFACE, GOVERNMENT_SURFACE];

    for (own, (name, account)) in accounts.into_iter().enumerate() {
        let token = common::token(&app, account).await;
        for (index, surface) in surfaces.into_iter().enumerate() {
            let expected = if index == own {
                StatusCode::OK
            } else {
                StatusCode::FORBIDDEN
            };
            for uri in surface {
                let reply = common::get(&app, uri, Auth::Bearer(&token)).await;
                assert_eq!(reply.status, expected, "{name} -> {uri}: {}", reply.body);
            }
        }
    }
}

#[tokio::test]
async fn no_session_means_unauthorized_everywhere() {
    let (app, _store) = common::test_app();

    let surfaces = [BUSINESS_SURFACE, PROVIDER_SURFACE, GOVERNMENT_SURFACE];
    for uri in surfaces.iter().flat_map(|s| s.iter()) {
        let reply = common::get(&app, uri, Auth::None).await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(reply.body["kind"], "Unauthorized");
    }

    for uri in ["/api/waste-types", "/api/providers", "/api/auth/me"] {
        let reply = common::get(&app, uri, Auth::None).await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn forged_token_is_treated_as_no_session() {
    let (app, _store) = common::test_app();

    let reply = common::get(
        &app,
        "/api/business/dashboard",
        Auth::Bearer("not.a.real-token"),
    )
    .await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reference_data_is_shared_by_every_role() {
    let (app, _store) = common::test_app();

    for account in [BUSINESS, PROVIDER, GOVERNMENT] {
        let token = common::token(&app, account).await;

        let types = common::get(&app, "/api/waste-types", Auth::Bearer(&token)).await;
        assert_eq!(types.status, StatusCode::OK);
        assert!(types.body.as_array().is_some_and(|a| !a.is_empty()));

        let providers = common::get(&app, "/api/providers", Auth::Bearer(&token)).await;
        assert_eq!(providers.status, StatusCode::OK);
        let names: Vec<&str> = providers
            .body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|p| p["company_name"].as_str())
            .collect();
        assert!(names.contains(&"EcoWaste Solutions"));
        assert!(names.contains(&"CleanEarth Disposal"));
    }
}

#[tokio::test]
async fn business_cannot_open_another_business_pickup() {
    let (app, _store) = common::test_app();
    let token = common::token(&app, BUSINESS).await;

    // Tech Innovators' e-waste pickup.
    let foreign = "/api/business/pickups/3c4d5e6f-7a8b-9c0d-1e2f-3a4b5c6d7e8f";
    let reply = common::get(&app, foreign, Auth::Bearer(&token)).await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);

    let cancel = format!("{foreign}/cancel");
    let reply = common::post_json(&app, &cancel, &serde_json::json!({}), Auth::Bearer(&token)).await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);

    let missing = "/api/business/pickups/00000000-0000-0000-0000-000000000000";
    let reply = common::get(&app, missing, Auth::Bearer(&token)).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}
