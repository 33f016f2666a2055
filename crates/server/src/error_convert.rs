use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert an AppError into a ServerFnError by serializing as JSON, so the
/// client can recover the kind and field errors with `AppError::from_server_error`.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// `.server_fn()` on `Result<T, AppError>`, for the tail of a server function.
pub trait ServerResultExt<T> {
    fn server_fn(self) -> Result<T, ServerFnError>;
}

impl<T> ServerResultExt<T> for Result<T, AppError> {
    fn server_fn(self) -> Result<T, ServerFnError> {
        self.map_err(app_error_to_server_fn_error)
    }
}

/// Session token failures never reveal why the token was rejected.
pub fn token_error(err: jsonwebtoken::errors::Error) -> AppError {
    tracing::error!(error = %err, "session token error");
    AppError::internal("Could not issue session")
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
