//! Session endpoints
//!
//! Logging in happens elsewhere; this crate only reads and clears the
//! `auth` cookie.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

use super::middleware::session::AUTH_COOKIE;

/// Page the browser lands on after logging out
pub const LOGOUT_REDIRECT: &str = "/chat";

/// `GET /logout` - expire the `auth` cookie and redirect to the chat page
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::TEMPORARY_REDIRECT,
        [
            (header::SET_COOKIE, expired_auth_cookie()),
            (header::LOCATION, LOGOUT_REDIRECT.to_string()),
        ],
    )
}

/// `Set-Cookie` value that removes the session cookie
pub fn expired_auth_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0", AUTH_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_auth_cookie() {
        assert_eq!(expired_auth_cookie(), "auth=; Path=/; Max-Age=0");
    }
}
