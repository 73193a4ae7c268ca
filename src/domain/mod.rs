//! Domain layer - Identities, avatar strategies and errors

pub mod avatar;
pub mod chat_user;
pub mod error;

pub use avatar::{AvatarStrategy, UserIdentity};
pub use chat_user::{ChatUser, UserId, UserIdValidationError};
pub use error::{DomainError, NoAvatarUrl};
