use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::warn;

use super::auth;
use super::avatar;
use super::health;
use super::state::AppState;

/// Create the full router with application state.
///
/// `avatar_url_prefix` is where the avatar directory is served; prefixes
/// that are not a local path (e.g. a CDN URL) serve nothing.
pub fn create_router(state: AppState, avatar_url_prefix: &str) -> Router {
    let router = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Session endpoints
        .route("/avatar", get(avatar::get_avatar))
        .route("/me", get(avatar::get_me))
        .route("/logout", get(auth::logout));

    let router = match avatar_mount_path(avatar_url_prefix) {
        Some(path) => router.nest_service(path, ServeDir::new(state.avatar_dir())),
        None => {
            warn!(
                url_prefix = avatar_url_prefix,
                "Avatar URL prefix is not a local path, avatar files will not be served"
            );
            router
        }
    };

    router.with_state(state).layer(TraceLayer::new_for_http())
}

/// `/avatars/` -> `/avatars`; `None` for root or non-path prefixes
fn avatar_mount_path(url_prefix: &str) -> Option<&str> {
    if !url_prefix.starts_with('/') || url_prefix.starts_with("//") {
        return None;
    }

    match url_prefix.trim_end_matches('/') {
        "" => None,
        path => Some(path),
    }
}
