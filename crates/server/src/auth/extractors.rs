use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, Role};

use super::jwt::Claims;

/// Extractor that requires a session. Returns 401 if no valid token.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Extractor that optionally extracts session claims. Never fails.
pub struct MaybeAuth(pub Option<Claims>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(parts.extensions.get::<Claims>().cloned()))
    }
}

pub const BUSINESS: u8 = 0;
pub const PROVIDER: u8 = 1;
pub const GOVERNMENT: u8 = 2;

/// Map a role constant to its `Role`. Unknown constants fall back to
/// `Government`, the most restrictive surface.
pub const fn role_for(role: u8) -> Role {
    match role {
        BUSINESS => Role::Business,
        PROVIDER => Role::Provider,
        _ => Role::Government,
    }
}

/// Extractor that requires a session with exactly the given role.
/// Returns 401 if unauthenticated, 403 for any other role.
///
/// Role constants: `BUSINESS`, `PROVIDER`, `GOVERNMENT`.
pub struct RoleRequired<const ROLE: u8>(pub Claims);

pub type BusinessOnly = RoleRequired<BUSINESS>;
pub type ProviderOnly = RoleRequired<PROVIDER>;
pub type GovernmentOnly = RoleRequired<GOVERNMENT>;

impl<const ROLE: u8, S: Send + Sync> FromRequestParts<S> for RoleRequired<ROLE> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let required = role_for(ROLE);
        if claims.role() != Some(required) {
            return Err(AppError::forbidden(format!(
                "{} role required",
                required.label()
            )));
        }

        Ok(RoleRequired(claims))
    }
}
