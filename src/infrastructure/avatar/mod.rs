//! Avatar strategy implementations

mod cached;
mod direct_url;
mod directory;
mod factory;
mod hashed;
mod resolver;

pub use cached::CachedStrategy;
pub use direct_url::DirectUrlStrategy;
pub use directory::{DirectoryLookupStrategy, DEFAULT_URL_PREFIX};
pub use factory::{AvatarResolverFactory, StrategyConfig};
pub use hashed::{email_digest, HashSource, HashedIdentityStrategy, GRAVATAR_BASE_URL};
pub use resolver::{AvatarResolver, AvatarResolverBuilder};
