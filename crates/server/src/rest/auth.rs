use axum::{extract::State, http::HeaderMap, Json};
use shared_types::{AppError, AuthResponse, LoginRequest, MessageResponse, SessionUser};
use std::sync::Arc;

use crate::auth::{cookies, extractors::AuthRequired, jwt};
use crate::error_convert::{token_error, ValidateRequest};
use crate::store::DataStore;

/// Log in with email and password.
///
/// Returns the session token in the body for API clients and sets the
/// `wm_session` cookie for browsers.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid email or password", body = AppError),
        (status = 422, description = "Malformed request", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(store, payload), fields(email = %payload.email))]
pub async fn login(
    State(store): State<Arc<DataStore>>,
    Json(payload): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<AuthResponse>), AppError> {
    payload.validate_request()?;

    let user = store.authenticate(&payload.email, &payload.password).await?;
    let token = jwt::create_session_token(&user).map_err(token_error)?;

    let mut headers = HeaderMap::new();
    cookies::set_session_cookie(&mut headers, &token);
    Ok((headers, Json(AuthResponse { user, token })))
}

/// Clear the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn logout() -> (HeaderMap, Json<MessageResponse>) {
    let mut headers = HeaderMap::new();
    cookies::clear_session_cookie(&mut headers);
    (headers, Json(MessageResponse::new("Logged out")))
}

/// The current session user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Session user", body = SessionUser),
        (status = 401, description = "No session", body = AppError)
    ),
    tag = "auth"
)]
pub async fn me(
    State(store): State<Arc<DataStore>>,
    AuthRequired(claims): AuthRequired,
) -> Result<Json<SessionUser>, AppError> {
    store
        .account(&claims.sub)
        .filter(|account| claims.role() == Some(account.role))
        .map(|account| Json(account.session_user()))
        .ok_or_else(|| AppError::unauthorized("Session account no longer exists"))
}
