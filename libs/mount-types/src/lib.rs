//! # Mount Types Crate
//!
//! Shared plain data types consumed by the requirement collector and the
//! geometry script compiler, plus the upstream product-lookup boundary.
//!
//! ## Architecture
//!
//! ```text
//! Product URL → ProductLookup (boundary) → ProductDescriptor
//!                                              ↓
//!                         mount-collect / mount-compile
//! ```
//!
//! ## Design Principles
//!
//! - **Typed Descriptors**: Dimensions and metadata are strongly typed Rust
//!   structs, deserializable from the catalog's wire format
//! - **Read-Only Inputs**: A descriptor is created once per session and never
//!   mutated downstream
//! - **Open Enumeration**: Unknown product-type tags deserialize to a
//!   fallback variant instead of failing

pub mod lookup;
pub mod product;

// Re-exports for convenience
pub use lookup::{LookupError, ProductLookup, StaticCatalog};
pub use product::{Dimensions, PortCounts, ProductDescriptor, ProductMetadata, ProductType};
