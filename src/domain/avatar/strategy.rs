use std::fmt::Debug;
use std::sync::Arc;

use super::UserIdentity;
use crate::domain::NoAvatarUrl;

/// Trait for avatar strategies (auth-supplied URL, gravatar, avatar directory, etc.)
pub trait AvatarStrategy: Send + Sync + Debug {
    /// Get the avatar URL for the given identity.
    ///
    /// Returns [`NoAvatarUrl`] when the strategy has nothing to offer.
    fn resolve(&self, identity: &dyn UserIdentity) -> Result<String, NoAvatarUrl>;

    /// Get strategy name for logging/debugging
    fn strategy_name(&self) -> &'static str;
}

impl<S: AvatarStrategy + ?Sized> AvatarStrategy for Arc<S> {
    fn resolve(&self, identity: &dyn UserIdentity) -> Result<String, NoAvatarUrl> {
        (**self).resolve(identity)
    }

    fn strategy_name(&self) -> &'static str {
        (**self).strategy_name()
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Strategy returning a fixed outcome and counting its invocations
    #[derive(Debug)]
    pub struct MockAvatarStrategy {
        url: Option<String>,
        name: &'static str,
        calls: AtomicUsize,
    }

    impl MockAvatarStrategy {
        pub fn succeeding(name: &'static str, url: impl Into<String>) -> Self {
            Self {
                url: Some(url.into()),
                name,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(name: &'static str) -> Self {
            Self {
                url: None,
                name,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AvatarStrategy for MockAvatarStrategy {
        fn resolve(&self, _identity: &dyn UserIdentity) -> Result<String, NoAvatarUrl> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.url.clone().ok_or(NoAvatarUrl)
        }

        fn strategy_name(&self) -> &'static str {
            self.name
        }
    }

    /// Plain identity for strategy tests
    #[derive(Debug, Clone, Default)]
    pub struct TestIdentity {
        pub unique_id: String,
        pub avatar_url: String,
        pub email: String,
    }

    impl TestIdentity {
        pub fn new(unique_id: &str) -> Self {
            Self {
                unique_id: unique_id.to_string(),
                ..Default::default()
            }
        }

        pub fn with_avatar_url(mut self, avatar_url: &str) -> Self {
            self.avatar_url = avatar_url.to_string();
            self
        }

        pub fn with_email(mut self, email: &str) -> Self {
            self.email = email.to_string();
            self
        }
    }

    impl UserIdentity for TestIdentity {
        fn unique_id(&self) -> &str {
            &self.unique_id
        }

        fn avatar_url(&self) -> &str {
            &self.avatar_url
        }

        fn email(&self) -> &str {
            &self.email
        }
    }
}
