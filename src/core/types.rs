//! Core type aliases and re-exports

pub use glam::DVec2;

/// Standard Result type for the generation core
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
