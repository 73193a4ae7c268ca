use md5::{Digest, Md5};
use serde::Deserialize;

use crate::domain::{AvatarStrategy, NoAvatarUrl, UserIdentity};

/// Base of every gravatar-style URL
pub const GRAVATAR_BASE_URL: &str = "//www.gravatar.com/avatar/";

/// Which identity attribute forms the URL suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashSource {
    /// MD5 digest of the lower-cased email
    #[default]
    Email,
    /// The unique ID as-is, for sessions whose ID already is the digest
    UniqueId,
}

/// Strategy that builds a gravatar-style URL from identity data.
///
/// The two [`HashSource`] modes are alternatives: an email-mode strategy
/// fails when no email is known rather than falling back to the unique ID.
#[derive(Debug, Clone)]
pub struct HashedIdentityStrategy {
    source: HashSource,
    base_url: String,
}

impl HashedIdentityStrategy {
    pub fn new(source: HashSource) -> Self {
        Self {
            source,
            base_url: GRAVATAR_BASE_URL.to_string(),
        }
    }

    pub fn email() -> Self {
        Self::new(HashSource::Email)
    }

    pub fn unique_id() -> Self {
        Self::new(HashSource::UniqueId)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl AvatarStrategy for HashedIdentityStrategy {
    fn resolve(&self, identity: &dyn UserIdentity) -> Result<String, NoAvatarUrl> {
        let suffix = match self.source {
            HashSource::Email => match identity.email() {
                "" => return Err(NoAvatarUrl),
                email => email_digest(email),
            },
            HashSource::UniqueId => match identity.unique_id() {
                "" => return Err(NoAvatarUrl),
                id => id.to_string(),
            },
        };

        Ok(format!("{}{}", self.base_url, suffix))
    }

    fn strategy_name(&self) -> &'static str {
        match self.source {
            HashSource::Email => "hashed_email",
            HashSource::UniqueId => "hashed_unique_id",
        }
    }
}

/// Lowercase hex MD5 of the lower-cased email.
///
/// Lower-cases one character at a time, without the context rules of
/// `str::to_lowercase` (final sigma), so digests match per-rune lowering.
pub fn email_digest(email: &str) -> String {
    let lowered: String = email.chars().flat_map(char::to_lowercase).collect();

    let mut hasher = Md5::new();
    hasher.update(lowered.as_bytes());
    hex::encode(hasher.finalize())
}
