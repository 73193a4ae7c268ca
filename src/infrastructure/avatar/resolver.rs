use std::sync::Arc;

use tracing::debug;

use crate::domain::{AvatarStrategy, NoAvatarUrl, UserIdentity};

/// Chain of avatar strategies that tries each in order.
///
/// The first strategy to produce a URL wins, even when a later one could
/// also answer. Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct AvatarResolver {
    strategies: Vec<Arc<dyn AvatarStrategy>>,
}

impl AvatarResolver {
    pub fn new(strategies: Vec<Arc<dyn AvatarStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn builder() -> AvatarResolverBuilder {
        AvatarResolverBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategy names in resolution order
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.strategy_name()).collect()
    }
}

impl AvatarStrategy for AvatarResolver {
    fn resolve(&self, identity: &dyn UserIdentity) -> Result<String, NoAvatarUrl> {
        for strategy in &self.strategies {
            match strategy.resolve(identity) {
                Ok(url) => {
                    debug!(
                        strategy = strategy.strategy_name(),
                        unique_id = identity.unique_id(),
                        "Avatar URL resolved"
                    );
                    return Ok(url);
                }
                Err(_) => {
                    debug!(
                        strategy = strategy.strategy_name(),
                        unique_id = identity.unique_id(),
                        "Strategy had no avatar URL, trying next"
                    );
                }
            }
        }

        debug!(
            unique_id = identity.unique_id(),
            "No strategy could supply an avatar URL"
        );
        Err(NoAvatarUrl)
    }

    fn strategy_name(&self) -> &'static str {
        "resolver"
    }
}

/// Builder for AvatarResolver
#[derive(Debug, Default)]
pub struct AvatarResolverBuilder {
    strategies: Vec<Arc<dyn AvatarStrategy>>,
}

impl AvatarResolverBuilder {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn AvatarStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn build(self) -> AvatarResolver {
        AvatarResolver::new(self.strategies)
    }
}
