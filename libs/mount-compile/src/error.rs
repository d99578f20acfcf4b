//! # Compilation Errors
//!
//! Contract violations detected by the compiler. All are fatal for the
//! compile call in question; no partial script is ever returned.

use thiserror::Error;

use mount_scad::ScriptError;
use mount_types::ProductType;

/// Errors that can occur during script compilation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompileError {
    /// A product dimension is zero, negative, or not finite.
    #[error("product dimensions must be positive: {width} x {height} x {depth}")]
    InvalidDimensions {
        /// Supplied width.
        width: f64,
        /// Supplied height.
        height: f64,
        /// Supplied depth.
        depth: f64,
    },

    /// A compute-module-only requirement field was present for a product
    /// type whose question sequence never asks for it.
    #[error("{field} is not applicable to product type {product_type:?}")]
    IncompatibleRequirements {
        /// The offending requirements field.
        field: &'static str,
        /// The product type that cannot carry it.
        product_type: ProductType,
    },

    /// The assembled program failed structural validation. Indicates a
    /// compiler bug, not bad input.
    #[error("inconsistent script: {0}")]
    Inconsistent(#[from] ScriptError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompileError::InvalidDimensions {
            width: 0.0,
            height: 29.0,
            depth: 87.0,
        };
        assert!(err.to_string().contains("0 x 29 x 87"));

        let err = CompileError::IncompatibleRequirements {
            field: "cooling",
            product_type: ProductType::Accessory,
        };
        assert!(err.to_string().contains("cooling"));
    }
}
