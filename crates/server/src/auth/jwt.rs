use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_types::{AppError, Role, SessionUser};

/// Claims carried by the session token stored in the `wm_session` cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Session user id. Opaque string; seed ids are not all UUIDs.
    pub sub: String,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Parsed role. A token minted with an unknown role yields `None`.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Redacted session user, if the role is recognised.
    pub fn session_user(&self) -> Option<SessionUser> {
        Some(SessionUser {
            id: self.sub.clone(),
            email: self.email.clone(),
            role: self.role()?,
        })
    }
}

const MISSING_SECRET: &str = "JWT_SECRET must be set to a non-empty value to sign sessions";

fn secret_from(value: Option<String>) -> Result<String, AppError> {
    value
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::internal(MISSING_SECRET))
}

/// Startup check, so a missing secret stops the server instead of failing
/// every login.
pub fn require_secret() -> Result<(), AppError> {
    secret_from(std::env::var("JWT_SECRET").ok()).map(|_| ())
}

fn jwt_secret() -> Result<String, Error> {
    secret_from(std::env::var("JWT_SECRET").ok()).map_err(|_| ErrorKind::InvalidKeyFormat.into())
}

pub fn session_expiry_hours() -> i64 {
    std::env::var("SESSION_EXPIRY_HOURS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|h: &i64| *h > 0)
        .unwrap_or(24)
}

pub fn create_session_token(user: &SessionUser) -> Result<String, Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(session_expiry_hours())).timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret()?.as_bytes()),
    )
}

pub fn validate_session_token(token: &str) -> Result<Claims, Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret()?.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
