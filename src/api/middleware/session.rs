//! Session extraction from the `auth` cookie
//!
//! The login flow stores the user as base64-encoded JSON in a cookie named
//! `auth`; this module only reads it.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{ChatUser, DomainError};

/// Name of the session cookie
pub const AUTH_COOKIE: &str = "auth";

/// Extractor that requires a valid session cookie
#[derive(Debug, Clone)]
pub struct RequireSession(pub ChatUser);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let value = extract_auth_cookie(&parts.headers).ok_or_else(|| {
            ApiError::unauthorized("Authentication required. Log in to obtain an 'auth' cookie")
                .with_param(AUTH_COOKIE)
        })?;

        let user = decode_session(&value).map_err(|e| {
            debug!(error = %e, "Rejecting malformed session cookie");
            ApiError::unauthorized(format!("Invalid session: {}", e)).with_param(AUTH_COOKIE)
        })?;

        Ok(RequireSession(user))
    }
}

/// Find the `auth` cookie value among all `Cookie` headers
pub fn extract_auth_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE)
        .map(|(_, value)| value.trim_matches('"').to_string())
}

/// Decode a session cookie value into the chat user it carries
pub fn decode_session(value: &str) -> Result<ChatUser, DomainError> {
    let bytes = STANDARD
        .decode(value)
        .map_err(|e| DomainError::validation(format!("cookie is not base64: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| DomainError::validation(format!("cookie payload is not a user: {}", e)))
}

/// Encode a chat user as a session cookie value
pub fn encode_session(user: &ChatUser) -> Result<String, DomainError> {
    let json = serde_json::to_vec(user)
        .map_err(|e| DomainError::internal(format!("Failed to encode session: {}", e)))?;

    Ok(STANDARD.encode(json))
}
