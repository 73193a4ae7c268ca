//! API middleware components

pub mod session;

pub use session::RequireSession;
