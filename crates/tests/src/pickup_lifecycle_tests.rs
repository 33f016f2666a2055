//! A pickup requested by a business, seen by its provider, cancelled, and
//! counted by the government dashboard.

use axum::http::StatusCode;
use chrono::{Days, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{GovernmentDashboard, PickupRequest, PickupStatus, PickupView, ProviderDashboard};

use crate::common::{
    self, Auth, BUSINESS, ECO_WASTE, GOVERNMENT, GREEN_SOLUTIONS, PLASTIC, PROVIDER,
    SCHEDULED_PICKUP,
};

const SEARCH_NOTE: &str = "lifecycle-note-4410";

fn pickup_form(notes: &str) -> Value {
    let date = Utc::now().date_naive() + Days::new(3);
    json!({
        "waste_type_id": PLASTIC,
        "volume_kg": 75.0,
        "provider_id": ECO_WASTE,
        "scheduled_date": date.to_string(),
        "pickup_address": "500 Harbor Way",
        "city": "Portland",
        "state": "OR",
        "postal_code": "97201",
        "notes": notes,
    })
}

async fn pending_for_provider(app: &axum::Router, token: &str) -> usize {
    let reply = common::get(app, "/api/provider/dashboard", Auth::Bearer(token)).await;
    assert_eq!(reply.status, StatusCode::OK);
    reply.parse::<ProviderDashboard>().stats.pending
}

#[tokio::test]
async fn request_reaches_provider_then_cancel_is_visible_everywhere() {
    let (app, _store) = common::test_app();
    let business = common::token(&app, BUSINESS).await;
    let provider = common::token(&app, PROVIDER).await;
    let government = common::token(&app, GOVERNMENT).await;

    assert_eq!(pending_for_provider(&app, &provider).await, 1);

    // Request
    let reply = common::post_json(
        &app,
        "/api/business/pickups",
        &pickup_form(SEARCH_NOTE),
        Auth::Bearer(&business),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.body);
    let created: PickupRequest = reply.parse();
    assert_eq!(created.status, PickupStatus::Scheduled);
    assert_eq!(created.business_id, GREEN_SOLUTIONS);
    assert_eq!(created.provider_id, ECO_WASTE);
    assert!(created.pickup_address.starts_with("500 Harbor Way"));

    // The provider finds it by its notes.
    let search = format!("/api/provider/pickups?search={SEARCH_NOTE}");
    let reply = common::get(&app, &search, Auth::Bearer(&provider)).await;
    let rows: Vec<PickupView> = reply.parse();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].pickup.id, created.id);
    assert_eq!(rows[0].business_name, "Green Solutions Inc.");
    assert_eq!(pending_for_provider(&app, &provider).await, 2);

    // Cancel
    let cancel = format!("/api/business/pickups/{}/cancel", created.id);
    let reply = common::post_json(&app, &cancel, &json!({}), Auth::Bearer(&business)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.parse::<PickupRequest>().status, PickupStatus::Cancelled);

    let reply = common::get(
        &app,
        "/api/provider/pickups?status=cancelled",
        Auth::Bearer(&provider),
    )
    .await;
    let cancelled: Vec<PickupView> = reply.parse();
    assert!(cancelled.iter().any(|row| row.pickup.id == created.id));
    assert!(cancelled.iter().all(|row| row.pickup.status == PickupStatus::Cancelled));
    assert_eq!(pending_for_provider(&app, &provider).await, 1);

    let reply = common::get(&app, "/api/government/dashboard", Auth::Bearer(&government)).await;
    assert_eq!(reply.parse::<GovernmentDashboard>().stats.total_pickups, 4);

    // A cancelled pickup stays cancelled.
    let reply = common::post_json(&app, &cancel, &json!({}), Auth::Bearer(&business)).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["kind"], "BadRequest");
}

#[tokio::test]
async fn detail_reflects_the_new_request() {
    let (app, _store) = common::test_app();
    let business = common::token(&app, BUSINESS).await;

    let reply = common::post_json(
        &app,
        "/api/business/pickups",
        &pickup_form("detail check"),
        Auth::Bearer(&business),
    )
    .await;
    let created: PickupRequest = reply.parse();

    let uri = format!("/api/business/pickups/{}", created.id);
    let reply = common::get(&app, &uri, Auth::Bearer(&business)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["view"]["pickup"]["id"], created.id.as_str());
    assert_eq!(reply.body["view"]["pickup"]["notes"], "detail check");

    let reply = common::get(&app, "/api/business/pickups?status=scheduled", Auth::Bearer(&business)).await;
    let scheduled: Vec<PickupView> = reply.parse();
    let ids: Vec<&str> = scheduled.iter().map(|row| row.pickup.id.as_str()).collect();
    assert!(ids.contains(&created.id.as_str()));
    assert!(ids.contains(&SCHEDULED_PICKUP));
}

#[tokio::test]
async fn invalid_form_reports_every_field() {
    let (app, _store) = common::test_app();
    let business = common::token(&app, BUSINESS).await;

    let today = Utc::now().date_naive();
    let form = json!({
        "waste_type_id": "",
        "volume_kg": 0.5,
        "provider_id": "no-such-provider",
        "scheduled_date": today.to_string(),
        "pickup_address": "",
        "city": "Portland",
        "state": "OR",
        "postal_code": "97201",
    });
    let reply = common::post_json(&app, "/api/business/pickups", &form, Auth::Bearer(&business)).await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);

    let fields = reply.body["field_errors"].as_object().unwrap();
    for field in [
        "waste_type_id",
        "volume_kg",
        "provider_id",
        "scheduled_date",
        "pickup_address",
    ] {
        assert!(fields.contains_key(field), "missing error for {field}: {fields:?}");
    }

    // Nothing was stored.
    let reply = common::get(&app, "/api/business/pickups", Auth::Bearer(&business)).await;
    assert_eq!(reply.parse::<Vec<PickupView>>().len(), 2);
}

#[tokio::test]
async fn only_scheduled_pickups_can_be_cancelled() {
    let (app, _store) = common::test_app();
    let business = common::token(&app, BUSINESS).await;

    // Green Solutions' completed paper pickup.
    let completed = "/api/business/pickups/2b3c4d5e-6f7a-8b9c-0d1e-2f3a4b5c6d7e/cancel";
    let reply = common::post_json(&app, completed, &json!({}), Auth::Bearer(&business)).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);

    let scheduled = format!("/api/business/pickups/{SCHEDULED_PICKUP}/cancel");
    let reply = common::post_json(&app, &scheduled, &json!({}), Auth::Bearer(&business)).await;
    assert_eq!(reply.status, StatusCode::OK);

    let detail = format!("/api/business/pickups/{SCHEDULED_PICKUP}");
    let reply = common::get(&app, &detail, Auth::Bearer(&business)).await;
    assert_eq!(reply.body["view"]["pickup"]["status"], "cancelled");
}
