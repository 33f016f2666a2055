use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard role carried by every session.
///
/// - `Business`: requests and tracks pickups for its own premises.
/// - `Provider`: collects waste; sees the pickups assigned to it plus its fleet.
/// - `Government`: oversight; read access to registries, compliance and analytics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Business,
    Provider,
    Government,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Business, Role::Provider, Role::Government];

    /// Parse a stored role string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "business" => Some(Role::Business),
            "provider" => Some(Role::Provider),
            "government" => Some(Role::Government),
            _ => None,
        }
    }

    /// Lowercase string for token / storage use.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Business => "business",
            Role::Provider => "provider",
            Role::Government => "government",
        }
    }

    /// Human-readable label for headers and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Business => "Business",
            Role::Provider => "Waste Provider",
            Role::Government => "Government",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Redacted identity of the logged-in actor. Never carries a password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// Client-side session lifecycle.
///
/// Starts in `Loading` until the durable record has been checked, then
/// settles on `Anonymous` or `Active`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Anonymous,
    Active(SessionUser),
}

impl SessionState {
    pub fn from_record(record: Option<SessionUser>) -> Self {
        match record {
            Some(user) => SessionState::Active(user),
            None => SessionState::Anonymous,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Active(user) => Some(user),
            _ => None,
        }
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Session token plus the redacted user, returned by the REST login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthResponse {
    pub user: SessionUser,
    pub token: String,
}

/// Generic acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
