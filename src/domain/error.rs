use thiserror::Error;

/// Returned whenever no avatar URL can be produced for a user.
///
/// Every strategy and the resolver itself report failure with this single
/// value, so callers only learn that resolution failed, never which source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unable to get an avatar URL")]
pub struct NoAvatarUrl;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<NoAvatarUrl> for DomainError {
    fn from(err: NoAvatarUrl) -> Self {
        Self::not_found(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_avatar_url_message() {
        assert_eq!(NoAvatarUrl.to_string(), "Unable to get an avatar URL");
    }

    #[test]
    fn test_no_avatar_url_converts_to_not_found() {
        let error: DomainError = NoAvatarUrl.into();
        assert!(matches!(error, DomainError::NotFound { .. }));
        assert_eq!(error.to_string(), "Not found: Unable to get an avatar URL");
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Avatar directory must not be empty");
        assert_eq!(
            error.to_string(),
            "Configuration error: Avatar directory must not be empty"
        );
    }
}
