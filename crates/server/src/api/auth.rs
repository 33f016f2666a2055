// Server-only session helpers shared across the api/* modules.

use dioxus::prelude::*;
use shared_types::{AppError, Role, SessionUser};
use std::sync::Arc;

use crate::error_convert::{AppErrorExt, ServerResultExt};
use crate::store::DataStore;

/// The caller's session user, or an "Authentication required" error.
pub(crate) fn require_auth() -> Result<SessionUser, ServerFnError> {
    crate::auth::require_session().server_fn()
}

/// The caller's session user if their role is exactly `role`.
pub(crate) fn require_role(role: Role) -> Result<SessionUser, ServerFnError> {
    let user = require_auth()?;
    if user.role != role {
        tracing::warn!(user_id = %user.id, role = %user.role, required = %role, "role mismatch");
        return Err(
            AppError::forbidden(format!("{} role required", role.label())).into_server_fn_error(),
        );
    }
    Ok(user)
}

pub(crate) fn store() -> Result<Arc<DataStore>, ServerFnError> {
    crate::state::store().server_fn()
}
