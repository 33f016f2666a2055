use dioxus::prelude::*;
use shared_types::{FeatureFlags, SessionUser};

/// Current feature flags. No auth required; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Check the credentials and, on success, start a session.
///
/// The session cookie is written by the session middleware after this
/// function returns. Failure leaves any existing session untouched.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<SessionUser, ServerFnError> {
    use crate::api::auth::store;
    use crate::auth::{cookies, jwt};
    use crate::error_convert::{token_error, AppErrorExt, ServerResultExt, ValidateRequest};
    use shared_types::LoginRequest;

    let req = LoginRequest { email, password };
    req.validate_request().server_fn()?;

    let store = store()?;
    let user = store.authenticate(&req.email, &req.password).await.server_fn()?;

    let token = jwt::create_session_token(&user)
        .map_err(|e| token_error(e).into_server_fn_error())?;
    cookies::schedule_session_cookie(&token);

    Ok(user)
}

/// End the session by clearing the session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;

    if let Ok(Some(claims)) = crate::auth::current_claims() {
        tracing::info!(user_id = %claims.sub, "logout");
    }
    cookies::schedule_clear_cookie();
    Ok(())
}

/// The session user recorded in the session cookie, or `None`.
///
/// A token that fails validation, or names an account that no longer
/// exists, yields `None` and clears the cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    use crate::api::auth::store;
    use crate::auth::cookies;

    let claims = match crate::auth::current_claims() {
        Ok(Some(claims)) => claims,
        Ok(None) => return Ok(None),
        Err(_) => {
            cookies::schedule_clear_cookie();
            return Ok(None);
        }
    };

    let store = store()?;
    match store.account(&claims.sub) {
        Some(account) if claims.role() == Some(account.role) => Ok(Some(account.session_user())),
        _ => {
            tracing::warn!(user_id = %claims.sub, "session names an unknown account");
            cookies::schedule_clear_cookie();
            Ok(None)
        }
    }
}
