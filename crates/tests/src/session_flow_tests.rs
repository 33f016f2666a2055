//! Login, hydration, guard and logout as one flow: the server answers, the
//! client-side guard decides.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::access::{self, GuardDecision};
use shared_types::{AuthResponse, Role, SessionState, SessionUser};

use crate::common::{self, Auth, BUSINESS, GOVERNMENT, PROVIDER};

/// What the guard would compute after hydrating from `/api/auth/me`.
fn hydrated(status: StatusCode, body: &serde_json::Value) -> SessionState {
    if status == StatusCode::OK {
        SessionState::from_record(serde_json::from_value(body.clone()).ok())
    } else {
        SessionState::Anonymous
    }
}

#[tokio::test]
async fn every_account_lands_on_its_own_dashboard() {
    let (app, _store) = common::test_app();

    for (account, role) in [
        (BUSINESS, Role::Business),
        (PROVIDER, Role::Provider),
        (GOVERNMENT, Role::Government),
    ] {
        let reply = common::login(&app, account).await;
        assert_eq!(reply.status, StatusCode::OK);
        let auth: AuthResponse = reply.parse();
        assert_eq!(auth.user.role, role);
        assert_eq!(auth.user.email, account.0);

        let session = SessionState::Active(auth.user);
        let landing = access::dashboard_path(role);
        assert_eq!(access::evaluate(&session, "/"), GuardDecision::Redirect(landing));
        assert_eq!(access::evaluate(&session, "/login"), GuardDecision::Redirect(landing));
        assert_eq!(access::evaluate(&session, landing), GuardDecision::Render);

        // The landing page's data loads for that role.
        let api = format!("/api{landing}");
        let reply = common::get(&app, &api, Auth::Bearer(&auth.token)).await;
        assert_eq!(reply.status, StatusCode::OK, "{api}: {}", reply.body);
    }
}

#[tokio::test]
async fn cookie_session_hydrates_the_guard() {
    let (app, _store) = common::test_app();

    let reply = common::login(&app, BUSINESS).await;
    let cookie = reply.session_cookie().expect("login should set the session cookie");
    assert!(cookie.starts_with("wm_session="));

    let me = common::get(&app, "/api/auth/me", Auth::Cookie(&cookie)).await;
    let session = hydrated(me.status, &me.body);
    let user = session.user().cloned().expect("cookie should restore the session");
    assert_eq!(user.role, Role::Business);

    assert_eq!(
        access::evaluate(&session, "/business/pickups/1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d"),
        GuardDecision::Render
    );
    assert_eq!(
        access::evaluate(&session, "/government/analytics"),
        GuardDecision::Redirect("/business/dashboard")
    );
}

#[tokio::test]
async fn session_user_never_carries_a_password() {
    let (app, _store) = common::test_app();

    let token = common::token(&app, PROVIDER).await;
    let me = common::get(&app, "/api/auth/me", Auth::Bearer(&token)).await;
    assert_eq!(me.status, StatusCode::OK);

    let fields = me.body.as_object().unwrap();
    assert_eq!(fields.len(), 3);
    assert!(!fields.contains_key("password"));
    let user: SessionUser = me.parse();
    assert_eq!(user.role, Role::Provider);
}

#[tokio::test]
async fn failed_login_leaves_the_existing_session_alone() {
    let (app, _store) = common::test_app();

    let token = common::token(&app, BUSINESS).await;

    let reply = common::login(&app, ("business@example.com", "provider123")).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(reply.body["message"], "Invalid email or password");
    assert!(reply.session_cookie().is_none());

    let me = common::get(&app, "/api/auth/me", Auth::Bearer(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], "business@example.com");
}

#[tokio::test]
async fn credentials_from_another_account_are_rejected() {
    let (app, _store) = common::test_app();

    for (email, password) in [
        ("provider@example.com", "business123"),
        ("government@example.com", "provider123"),
        ("nobody@example.com", "business123"),
    ] {
        let reply = common::login(&app, (email, password)).await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED, "{email}");
        assert_eq!(reply.body["kind"], "Unauthorized");
    }
}

#[tokio::test]
async fn logout_sends_every_protected_route_to_login() {
    let (app, _store) = common::test_app();

    let reply = common::login(&app, GOVERNMENT).await;
    assert!(reply.session_cookie().is_some());

    let out = common::post_json(&app, "/api/auth/logout", &serde_json::json!({}), Auth::None).await;
    assert_eq!(out.status, StatusCode::OK);
    let cleared = out.session_cookie().expect("logout should clear the cookie");
    assert_eq!(cleared, "wm_session=");

    // The browser now sends the emptied cookie.
    let me = common::get(&app, "/api/auth/me", Auth::Cookie(&cleared)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    let session = hydrated(me.status, &me.body);
    assert_eq!(session, SessionState::Anonymous);
    for path in [
        "/",
        "/business/dashboard",
        "/provider/fleet",
        "/government/dashboard",
    ] {
        assert_eq!(
            access::evaluate(&session, path),
            GuardDecision::Redirect("/login"),
            "{path}"
        );
    }
    assert_eq!(access::evaluate(&session, "/login"), GuardDecision::Render);
}
