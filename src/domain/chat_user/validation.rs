//! Chat user validation utilities

use thiserror::Error;

/// Errors that can occur during chat user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserIdValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("User ID contains invalid character: '{0}'")]
    InvalidIdCharacter(char),
}

const MAX_USER_ID_LENGTH: usize = 256;

/// Validate a chat user ID
///
/// Rules:
/// - Cannot be empty or whitespace only
/// - Maximum 256 characters
/// - No path separators or control characters, since the ID doubles as a
///   file name prefix in the avatar directory
pub fn validate_user_id(id: &str) -> Result<(), UserIdValidationError> {
    if id.trim().is_empty() {
        return Err(UserIdValidationError::EmptyId);
    }

    if id.chars().count() > MAX_USER_ID_LENGTH {
        return Err(UserIdValidationError::IdTooLong(MAX_USER_ID_LENGTH));
    }

    if let Some(c) = id
        .chars()
        .find(|c| *c == '/' || *c == '\\' || c.is_control())
    {
        return Err(UserIdValidationError::InvalidIdCharacter(c));
    }

    Ok(())
}
