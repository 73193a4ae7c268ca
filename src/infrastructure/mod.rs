//! Infrastructure layer - Strategy implementations and logging

pub mod avatar;
pub mod logging;
