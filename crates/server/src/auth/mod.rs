pub mod cookies;
pub mod extractors;
pub mod jwt;
pub mod middleware;
pub mod password;

use shared_types::{AppError, SessionUser};

/// Validate the caller's session from the current server-function request.
///
/// Checks middleware-injected `Claims` first and falls back to parsing the
/// cookie or Bearer header directly. `Ok(None)` means no session.
pub fn current_claims() -> Result<Option<jwt::Claims>, AppError> {
    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        return Ok(None);
    };
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(Some(claims.clone()));
    }

    match cookies::extract_session_token(&parts.headers) {
        Some(token) => jwt::validate_session_token(&token)
            .map(Some)
            .map_err(|_| AppError::unauthorized("Invalid or expired session")),
        None => Ok(None),
    }
}

/// Like [`current_claims`], but a missing session is an error.
pub fn require_session() -> Result<SessionUser, AppError> {
    current_claims()?
        .as_ref()
        .and_then(jwt::Claims::session_user)
        .ok_or_else(|| AppError::unauthorized("Authentication required"))
}
