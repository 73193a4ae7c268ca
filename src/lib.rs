//! Chat avatars
//!
//! Resolves display-picture URLs for chat participants by trying an ordered
//! chain of strategies:
//! - Avatar files uploaded to a local directory
//! - Avatar URLs supplied by the auth provider at login
//! - Gravatar URLs derived from the user's email or ID

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::avatar::AvatarResolverFactory;

/// Build the shared application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let resolver = AvatarResolverFactory::create(&config.avatars)?;

    Ok(AppState::new(
        Arc::new(resolver),
        config.avatars.directory.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_from_defaults() {
        let state = create_app_state(&AppConfig::default()).unwrap();

        assert_eq!(state.resolver().len(), 3);
        assert_eq!(state.avatar_dir(), std::path::Path::new("avatars"));
    }
}
