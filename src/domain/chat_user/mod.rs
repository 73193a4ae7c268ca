//! Chat user domain
//!
//! The participant identity carried by the session cookie.

mod entity;
mod validation;

pub use entity::{ChatUser, UserId};
pub use validation::{validate_user_id, UserIdValidationError};
