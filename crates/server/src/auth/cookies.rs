use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

/// Name of the durable session record.
pub const SESSION_COOKIE: &str = "wm_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty())
}

fn session_cookie(value: &str, max_age: cookie::time::Duration) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, value.to_string()))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }
    cookie.build()
}

/// Set-Cookie value carrying the session token.
pub fn build_session_cookie(token: &str, max_age_hours: i64) -> Option<HeaderValue> {
    let cookie = session_cookie(token, cookie::time::Duration::hours(max_age_hours));
    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Set-Cookie value that removes the session record.
pub fn build_clear_cookie() -> Option<HeaderValue> {
    let cookie = session_cookie("", cookie::time::Duration::ZERO);
    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Session token from the cookie (preferred) or a Bearer header (REST clients).
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE).filter(|t| !t.is_empty()) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

pub fn set_session_cookie(headers: &mut HeaderMap, token: &str) {
    match build_session_cookie(token, jwt::session_expiry_hours()) {
        Some(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        None => tracing::error!("session token is not a valid header value"),
    }
}

pub fn clear_session_cookie(headers: &mut HeaderMap) {
    if let Some(value) = build_clear_cookie() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Cookie change requested by a server function, applied by the session
/// middleware once the handler has finished.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set { token: String },
    Clear,
}

/// Per-request slot shared between the middleware and server functions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        match self.0.lock() {
            Ok(mut slot) => *slot = Some(action),
            Err(_) => tracing::error!("cookie slot lock poisoned"),
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(action);
        }
    }
}

/// Ask the middleware to write the session cookie on the way out.
pub fn schedule_session_cookie(token: &str) {
    schedule(PendingCookieAction::Set {
        token: token.to_string(),
    });
}

/// Ask the middleware to remove the session cookie on the way out.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}
