//! API types

pub mod avatar;
pub mod error;

pub use avatar::{AvatarResponse, SessionUserResponse};
pub use error::{ApiError, ApiErrorResponse};
