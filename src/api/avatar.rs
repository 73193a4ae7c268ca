//! Avatar endpoints

use axum::{extract::State, Json};
use tracing::debug;

use super::middleware::RequireSession;
use super::state::AppState;
use super::types::{ApiError, AvatarResponse, SessionUserResponse};

/// `GET /avatar` - avatar URL of the session user, 404 when none resolves
pub async fn get_avatar(
    State(state): State<AppState>,
    RequireSession(user): RequireSession,
) -> Result<Json<AvatarResponse>, ApiError> {
    let avatar_url = state.resolve_avatar(user).await?;

    Ok(Json(AvatarResponse { avatar_url }))
}

/// `GET /me` - session user with the resolved avatar URL
pub async fn get_me(
    State(state): State<AppState>,
    RequireSession(user): RequireSession,
) -> Result<Json<SessionUserResponse>, ApiError> {
    let avatar_url = match state.resolve_avatar(user.clone()).await {
        Ok(url) => Some(url),
        Err(crate::domain::DomainError::NotFound { .. }) => {
            debug!(user_id = %user.user_id(), "No avatar URL for session user");
            None
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(SessionUserResponse::new(&user, avatar_url)))
}
