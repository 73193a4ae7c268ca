//! Avatar resolution domain

mod identity;
mod strategy;

pub use identity::UserIdentity;
pub use strategy::AvatarStrategy;

#[cfg(test)]
pub use strategy::mock;
