//! External service integrations.

pub mod fit;
