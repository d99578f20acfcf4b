//! # Mount Compile Crate
//!
//! Deterministic translation of a `(ProductDescriptor,
//! MountingRequirements)` pair into a geometry script.
//!
//! ## Architecture
//!
//! ```text
//! descriptor + requirements → EnclosureLayout → ScadProgram → GeometryScript
//! ```
//!
//! The compiler owns no state and performs no I/O: the same inputs always
//! produce byte-identical output, so callers may cache or compare scripts.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::EngineConfig;
//! use mount_collect::{MountType, MountingRequirements, Orientation};
//! use mount_compile::compile;
//! use mount_types::{ProductLookup, StaticCatalog};
//!
//! let descriptor = StaticCatalog::default()
//!     .lookup("https://example.com/jetson")
//!     .unwrap();
//! let requirements = MountingRequirements {
//!     mount_type: MountType::Desktop,
//!     cooling: Some(mount_collect::Cooling::Passive),
//!     orientation: Orientation::Horizontal,
//!     clearance_mm: 5.0,
//!     accessories: Some(Default::default()),
//! };
//! let script = compile(&descriptor, &requirements, &EngineConfig::default()).unwrap();
//! assert!(script.as_str().contains("difference()"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use config::constants::EngineConfig;
use mount_collect::MountingRequirements;
use mount_scad::ScadProgram;
use mount_types::ProductDescriptor;

pub mod error;
pub mod layout;
pub mod program;
pub mod sink;

// Re-export public API
pub use error::CompileError;
pub use layout::{EnclosureLayout, MountTab, PortCutout};

// =============================================================================
// GEOMETRY SCRIPT
// =============================================================================

/// A complete, rendered geometry script.
///
/// Produced fresh on every compile call; internally consistent or not
/// produced at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryScript(String);

impl GeometryScript {
    /// The script text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the script, yielding the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeometryScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compiles the script tree without rendering it.
///
/// Exposed so callers and tests can assert on geometry structure
/// independently of text formatting.
pub fn compile_program(
    descriptor: &ProductDescriptor,
    requirements: &MountingRequirements,
    engine: &EngineConfig,
) -> Result<ScadProgram, CompileError> {
    program::build_program(descriptor, requirements, engine)
}

/// Compiles and renders the geometry script.
///
/// This is the main entry point for the compiler.
///
/// ## Returns
///
/// `Result<GeometryScript, CompileError>` - the rendered script on success;
/// never a partial script on failure.
pub fn compile(
    descriptor: &ProductDescriptor,
    requirements: &MountingRequirements,
    engine: &EngineConfig,
) -> Result<GeometryScript, CompileError> {
    let program = compile_program(descriptor, requirements, engine)?;
    mount_scad::validate(&program)?;
    Ok(GeometryScript(mount_scad::render(&program)))
}
