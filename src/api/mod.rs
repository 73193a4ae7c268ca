//! API layer - HTTP endpoints and middleware

pub mod auth;
pub mod avatar;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use middleware::RequireSession;
pub use router::create_router;
pub use state::AppState;
