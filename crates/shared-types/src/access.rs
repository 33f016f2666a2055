//! Route guard decisions.
//!
//! The guard is a pure function of the session state and the target path so
//! that every redirect rule can be tested without a router.

use crate::models::{Role, SessionState};

pub const LOGIN_PATH: &str = "/login";

/// Default landing page for a role.
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Business => "/business/dashboard",
        Role::Provider => "/provider/dashboard",
        Role::Government => "/government/dashboard",
    }
}

/// Default landing page for a stored role string; unknown roles go to login.
pub fn dashboard_path_for(role: &str) -> &'static str {
    Role::parse(role).map(dashboard_path).unwrap_or(LOGIN_PATH)
}

/// Access class of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// `/`; always forwards somewhere.
    Root,
    /// The login page.
    Login,
    /// Open to everyone, e.g. the not-found page.
    Public,
    /// Requires a session whose role is in the set.
    Protected(&'static [Role]),
}

const BUSINESS_ONLY: &[Role] = &[Role::Business];
const PROVIDER_ONLY: &[Role] = &[Role::Provider];
const GOVERNMENT_ONLY: &[Role] = &[Role::Government];

/// Classify a path by its first segment. Query strings and trailing slashes
/// are ignored.
pub fn route_access(path: &str) -> RouteAccess {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let first = path.trim_matches('/').split('/').next().unwrap_or_default();
    match first {
        "" => RouteAccess::Root,
        "login" => RouteAccess::Login,
        "business" => RouteAccess::Protected(BUSINESS_ONLY),
        "provider" => RouteAccess::Protected(PROVIDER_ONLY),
        "government" => RouteAccess::Protected(GOVERNMENT_ONLY),
        _ => RouteAccess::Public,
    }
}

/// What the guard does for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not settled yet: show a placeholder, do not redirect.
    Placeholder,
    Redirect(&'static str),
    Render,
}

pub fn evaluate(session: &SessionState, path: &str) -> GuardDecision {
    let access = route_access(path);
    if access == RouteAccess::Public {
        return GuardDecision::Render;
    }
    let user = match session {
        SessionState::Loading => return GuardDecision::Placeholder,
        SessionState::Anonymous => None,
        SessionState::Active(user) => Some(user),
    };

    match (access, user) {
        (RouteAccess::Login, None) => GuardDecision::Render,
        (RouteAccess::Login | RouteAccess::Root, Some(user)) => {
            GuardDecision::Redirect(dashboard_path(user.role))
        }
        (RouteAccess::Root | RouteAccess::Protected(_), None) => {
            GuardDecision::Redirect(LOGIN_PATH)
        }
        (RouteAccess::Protected(allowed), Some(user)) if !allowed.contains(&user.role) => {
            GuardDecision::Redirect(dashboard_path(user.role))
        }
        _ => GuardDecision::Render,
    }
}
