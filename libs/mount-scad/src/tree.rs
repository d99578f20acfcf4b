//! # Script Tree Types
//!
//! Fully resolved geometry script nodes. All values are concrete numbers;
//! nothing in the tree references ambient state beyond the program's own
//! `segments` header.

use serde::{Deserialize, Serialize};

// =============================================================================
// SCRIPT NODES
// =============================================================================

/// A node in the geometry script tree.
///
/// Sizes and offsets are `[x, y, z]` in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScadNode {
    /// Axis-aligned rectangular solid with its min corner at the local origin.
    ///
    /// ## Rendered As
    ///
    /// ```text
    /// cube([x, y, z]);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: [f64; 3],
    },

    /// Circular cylinder along the local +z axis.
    ///
    /// ## Rendered As
    ///
    /// ```text
    /// cylinder(h=2, d=5);
    /// ```
    Cylinder {
        /// Height along z.
        height: f64,
        /// Diameter.
        diameter: f64,
    },

    /// Translation applied to a single child.
    Translate {
        /// Offset as [x, y, z].
        offset: [f64; 3],
        /// Transformed child.
        child: Box<ScadNode>,
    },

    /// Rotation (degrees per axis) applied to a single child.
    Rotate {
        /// Rotation as [x, y, z] degrees.
        degrees: [f64; 3],
        /// Transformed child.
        child: Box<ScadNode>,
    },

    /// Boolean union of all children.
    Union {
        /// Combined children.
        children: Vec<ScadNode>,
    },

    /// Boolean difference: first child minus every subsequent child.
    Difference {
        /// Base solid followed by subtracted solids.
        children: Vec<ScadNode>,
    },

    /// A labeling comment attached to a single child.
    Comment {
        /// Comment text, emitted as a `//` line above the child.
        text: String,
        /// Labeled child.
        child: Box<ScadNode>,
    },
}

impl ScadNode {
    /// Cube constructor.
    pub fn cube(size: [f64; 3]) -> Self {
        Self::Cube { size }
    }

    /// Cylinder constructor.
    pub fn cylinder(height: f64, diameter: f64) -> Self {
        Self::Cylinder { height, diameter }
    }

    /// Wraps a child in a translation.
    pub fn translate(offset: [f64; 3], child: ScadNode) -> Self {
        Self::Translate {
            offset,
            child: Box::new(child),
        }
    }

    /// Wraps a child in a rotation.
    pub fn rotate(degrees: [f64; 3], child: ScadNode) -> Self {
        Self::Rotate {
            degrees,
            child: Box::new(child),
        }
    }

    /// Union constructor. A single child collapses to itself.
    pub fn union(children: Vec<ScadNode>) -> Self {
        match children.len() {
            1 => children.into_iter().next().unwrap_or(Self::Union {
                children: Vec::new(),
            }),
            _ => Self::Union { children },
        }
    }

    /// Difference constructor.
    pub fn difference(children: Vec<ScadNode>) -> Self {
        Self::Difference { children }
    }

    /// Attaches a labeling comment to a child.
    pub fn comment(text: impl Into<String>, child: ScadNode) -> Self {
        Self::Comment {
            text: text.into(),
            child: Box::new(child),
        }
    }
}

// =============================================================================
// PROGRAM
// =============================================================================

/// A named sub-assembly definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDef {
    /// Module name as instantiated from the assembly.
    pub name: String,
    /// Module body.
    pub body: ScadNode,
}

/// A complete geometry script: resolution header, named sub-assemblies, and
/// the ordered assembly statements that instantiate them.
///
/// Modules render before the assembly, so every referenced sub-assembly is
/// defined before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScadProgram {
    /// Optional leading `//` comment line, e.g. the product name.
    pub header: Option<String>,
    /// Tessellation segment count emitted as `$fn`.
    pub segments: u32,
    /// Sub-assembly definitions in emission order.
    pub modules: Vec<ModuleDef>,
    /// Names of modules instantiated by the final assembly, in order.
    pub assembly: Vec<String>,
}

// =============================================================================
// TESTS
// =============================================================================
