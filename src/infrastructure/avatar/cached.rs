use std::time::Duration;

use moka::sync::Cache;

use crate::domain::{AvatarStrategy, NoAvatarUrl, UserIdentity};

/// Strategy wrapper that remembers successful lookups with a TTL.
///
/// Failures are never cached, so a newly uploaded avatar shows up on the
/// next call. A replaced file is only seen after expiry or [`invalidate`].
///
/// [`invalidate`]: CachedStrategy::invalidate
#[derive(Debug)]
pub struct CachedStrategy<S: AvatarStrategy> {
    inner: S,
    cache: Cache<String, String>,
}

impl<S: AvatarStrategy> CachedStrategy<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self::with_capacity(inner, ttl, 10_000)
    }

    pub fn with_capacity(inner: S, ttl: Duration, capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(capacity)
            .build();

        Self { inner, cache }
    }

    /// Drop the cached URL of one user
    pub fn invalidate(&self, unique_id: &str) {
        self.cache.invalidate(unique_id);
    }

    /// Drop all cached URLs
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: AvatarStrategy> AvatarStrategy for CachedStrategy<S> {
    fn resolve(&self, identity: &dyn UserIdentity) -> Result<String, NoAvatarUrl> {
        let unique_id = identity.unique_id();
        if unique_id.is_empty() {
            return self.inner.resolve(identity);
        }

        if let Some(url) = self.cache.get(unique_id) {
            tracing::trace!(
                strategy = self.inner.strategy_name(),
                unique_id,
                "Cache hit for avatar URL"
            );
            return Ok(url);
        }

        let url = self.inner.resolve(identity)?;
        self.cache.insert(unique_id.to_string(), url.clone());

        Ok(url)
    }

    fn strategy_name(&self) -> &'static str {
        self.inner.strategy_name()
    }
}
