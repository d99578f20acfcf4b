//! # Mount SCAD Crate
//!
//! Typed geometry script tree and its deterministic text renderer.
//!
//! ## Architecture
//!
//! ```text
//! mount-compile (layout math) → ScadProgram (tree) → render → OpenSCAD text
//! ```
//!
//! Building an explicit tree of named sub-assemblies and boolean operations
//! decouples "what geometry exists" from "how it is printed": the compiler is
//! tested against the tree, formatting against the renderer.
//!
//! ## Example
//!
//! ```rust
//! use mount_scad::{render, ModuleDef, ScadNode, ScadProgram};
//!
//! let program = ScadProgram {
//!     header: None,
//!     segments: 50,
//!     modules: vec![ModuleDef {
//!         name: "body".into(),
//!         body: ScadNode::cube([10.0, 10.0, 10.0]),
//!     }],
//!     assembly: vec!["body".into()],
//! };
//! let text = render(&program);
//! assert!(text.contains("module body()"));
//! ```

pub mod printer;
pub mod tree;
pub mod validate;

// Re-export public API
pub use printer::render;
pub use tree::{ModuleDef, ScadNode, ScadProgram};
pub use validate::{validate, ScriptError};
