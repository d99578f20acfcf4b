//! # Config Crate
//!
//! Centralized configuration constants for the enclosure generator pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EngineConfig, WALL_THICKNESS_MM, DEFAULT_SEGMENTS};
//!
//! // Shell walls default to the engine-wide thickness
//! let engine = EngineConfig::default();
//! assert_eq!(engine.wall_thickness_mm, WALL_THICKNESS_MM);
//!
//! // Tessellation resolution for emitted cylinders
//! assert_eq!(engine.segments, DEFAULT_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Hidden Literals**: Downstream crates take an `EngineConfig`, never
//!   re-declare dimensions
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
