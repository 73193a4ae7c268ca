//! Application state for shared services

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{AvatarStrategy, ChatUser, DomainError};
use crate::infrastructure::avatar::AvatarResolver;

/// Application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    resolver: Arc<AvatarResolver>,
    avatar_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(resolver: Arc<AvatarResolver>, avatar_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver,
            avatar_dir: Arc::new(avatar_dir.into()),
        }
    }

    pub fn resolver(&self) -> &Arc<AvatarResolver> {
        &self.resolver
    }

    pub fn avatar_dir(&self) -> &Path {
        &self.avatar_dir
    }

    /// Resolve the avatar of a session user off the async runtime, since
    /// directory lookups block on the filesystem
    pub async fn resolve_avatar(&self, user: ChatUser) -> Result<String, DomainError> {
        let resolver = self.resolver.clone();

        tokio::task::spawn_blocking(move || resolver.resolve(&user))
            .await
            .map_err(|e| DomainError::internal(format!("Avatar resolution task failed: {}", e)))?
            .map_err(DomainError::from)
    }
}
