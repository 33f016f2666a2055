use dioxus::prelude::*;
use shared_types::{AppError, CancelToken, SessionState, SessionUser};

/// Global session state, provided once at the app root.
///
/// Starts as `Loading`; the route guard hydrates it from the session cookie
/// (via `get_current_user`) before the first protected render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<SessionState>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(SessionState::Loading),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.session.read().is_loading()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.read().user().cloned()
    }

    /// Settle a `Loading` session from the durable record. Later calls are
    /// ignored so a login that lands first is not overwritten.
    pub fn hydrate(&mut self, record: Option<SessionUser>) {
        if self.is_loading() {
            self.session.set(SessionState::from_record(record));
        }
    }

    /// Check the credentials and start a session.
    ///
    /// Returns `None` when `token` was cancelled while the request was in
    /// flight; the session is then left alone. A failed login also leaves the
    /// previous session unchanged.
    pub async fn login(
        mut self,
        email: String,
        password: String,
        token: CancelToken,
    ) -> Option<Result<SessionUser, AppError>> {
        let result = server::api::login(email, password).await;
        let result = token.deliver(result)?;

        Some(match result {
            Ok(user) => {
                tracing::info!(role = %user.role, "signed in");
                self.session.set(SessionState::Active(user.clone()));
                Ok(user)
            }
            Err(e) => {
                let message = e.to_string();
                Err(AppError::from_server_error(&message)
                    .unwrap_or_else(|| AppError::internal(AppError::friendly_message(&message))))
            }
        })
    }

    /// Clear the session cookie and the in-memory session.
    pub async fn logout(mut self) {
        if let Err(e) = server::api::logout().await {
            tracing::warn!(error = %e, "logout request failed; clearing local session anyway");
        }
        self.session.set(SessionState::Anonymous);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
