use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::validate_session_token;

/// Permissive session middleware.
///
/// On each request:
/// 1. Validates the session token from the `wm_session` cookie (or a Bearer
///    header) and inserts the `Claims` into request extensions
/// 2. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 3. After the handler runs, applies the pending cookie action, or drops a
///    stale session cookie that failed validation
///
/// Does NOT reject unauthenticated requests; handlers and extractors decide.
pub async fn auth_middleware(mut req: Request, next: Next) -> Response {
    let mut stale_cookie = false;

    if let Some(token) = cookies::extract_session_token(req.headers()) {
        match validate_session_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!(error = %e, "discarding invalid session token");
                stale_cookie = true;
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    match cookie_slot.take() {
        Some(PendingCookieAction::Set { token }) => {
            cookies::set_session_cookie(response.headers_mut(), &token);
        }
        Some(PendingCookieAction::Clear) => {
            cookies::clear_session_cookie(response.headers_mut());
        }
        None if stale_cookie => {
            cookies::clear_session_cookie(response.headers_mut());
        }
        None => {}
    }

    response
}
