use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use super::{
    AvatarResolver, CachedStrategy, DirectUrlStrategy, DirectoryLookupStrategy, HashSource,
    HashedIdentityStrategy, GRAVATAR_BASE_URL,
};
use crate::config::AvatarsConfig;
use crate::domain::{AvatarStrategy, DomainError};

/// Strategy type configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    DirectUrl,
    Hashed {
        #[serde(default)]
        source: HashSource,
        #[serde(default = "default_base_url")]
        base_url: String,
    },
    Directory {
        /// Remember found avatars for this many seconds; re-scan on every call when unset
        #[serde(default)]
        cache_ttl_secs: Option<u64>,
    },
}

fn default_base_url() -> String {
    GRAVATAR_BASE_URL.to_string()
}

impl StrategyConfig {
    /// Directory lookup, then auth-supplied URL, then gravatar by email
    pub fn default_chain() -> Vec<StrategyConfig> {
        vec![
            StrategyConfig::Directory {
                cache_ttl_secs: None,
            },
            StrategyConfig::DirectUrl,
            StrategyConfig::Hashed {
                source: HashSource::Email,
                base_url: default_base_url(),
            },
        ]
    }
}

/// Factory for creating avatar resolvers
#[derive(Debug)]
pub struct AvatarResolverFactory;

impl AvatarResolverFactory {
    /// Create the resolver chain from configuration
    pub fn create(config: &AvatarsConfig) -> Result<AvatarResolver, DomainError> {
        let mut builder = AvatarResolver::builder();

        for strategy in &config.strategies {
            builder = builder.with_strategy(Self::create_strategy(strategy, config)?);
        }

        let resolver = builder.build();
        tracing::info!(
            strategies = ?resolver.strategy_names(),
            "Avatar resolver configured"
        );

        Ok(resolver)
    }

    /// Create a single strategy
    pub fn create_strategy(
        strategy: &StrategyConfig,
        config: &AvatarsConfig,
    ) -> Result<Arc<dyn AvatarStrategy>, DomainError> {
        match strategy {
            StrategyConfig::DirectUrl => Ok(Arc::new(DirectUrlStrategy)),

            StrategyConfig::Hashed { source, base_url } => {
                if base_url.trim().is_empty() {
                    return Err(DomainError::configuration(
                        "Hashed avatar strategy requires a base URL",
                    ));
                }

                Ok(Arc::new(
                    HashedIdentityStrategy::new(*source).with_base_url(base_url),
                ))
            }

            StrategyConfig::Directory { cache_ttl_secs } => {
                if config.directory.as_os_str().is_empty() {
                    return Err(DomainError::configuration(
                        "Directory avatar strategy requires avatars.directory",
                    ));
                }

                if config.url_prefix.is_empty() {
                    return Err(DomainError::configuration(
                        "Directory avatar strategy requires avatars.url_prefix",
                    ));
                }

                let lookup = DirectoryLookupStrategy::new(&config.directory)
                    .with_url_prefix(&config.url_prefix);

                match cache_ttl_secs {
                    None => Ok(Arc::new(lookup)),
                    Some(0) => Err(DomainError::configuration(
                        "Directory avatar cache TTL must be greater than zero",
                    )),
                    Some(ttl) => Ok(Arc::new(CachedStrategy::new(
                        lookup,
                        Duration::from_secs(*ttl),
                    ))),
                }
            }
        }
    }
}
