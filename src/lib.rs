//! SeedScape - deterministic procedural content for unbounded hex maps

pub mod core;
pub mod math;
pub mod noise;
pub mod generation;

pub use generation::{generate, CategoryDomains, GenerationConfig, HexGenerator, Tile};
pub use math::HexCoord;
