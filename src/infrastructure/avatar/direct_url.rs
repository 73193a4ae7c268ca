use crate::domain::{AvatarStrategy, NoAvatarUrl, UserIdentity};

/// Strategy that returns the avatar URL the auth provider supplied at login
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectUrlStrategy;

impl AvatarStrategy for DirectUrlStrategy {
    fn resolve(&self, identity: &dyn UserIdentity) -> Result<String, NoAvatarUrl> {
        match identity.avatar_url() {
            "" => Err(NoAvatarUrl),
            url => Ok(url.to_string()),
        }
    }

    fn strategy_name(&self) -> &'static str {
        "direct_url"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::avatar::mock::TestIdentity;

    #[test]
    fn test_returns_supplied_url() {
        let identity = TestIdentity::new("u1").with_avatar_url("http://url-to-avatar/");

        let url = DirectUrlStrategy.resolve(&identity).unwrap();
        assert_eq!(url, "http://url-to-avatar/");
    }

    #[test]
    fn test_fails_without_url() {
        let identity = TestIdentity::new("u1").with_email("a@b.com");

        assert_eq!(DirectUrlStrategy.resolve(&identity), Err(NoAvatarUrl));
    }
}
