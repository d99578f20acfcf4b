//! # Mount Collect Crate
//!
//! Drives the mounting questionnaire: a finite, product-type-parameterized
//! sequence of questions whose accepted answers fold into a typed
//! [`MountingRequirements`] record.
//!
//! ## Architecture
//!
//! ```text
//! ProductType → question_sequence → Collector (one answer per step)
//!                                        ↓
//!                              MountingRequirements → mount-compile
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mount_collect::{Answer, Collector, Progress};
//! use mount_types::ProductType;
//!
//! let mut collector = Collector::new(ProductType::Accessory);
//! collector.submit_answer(0, Answer::Choice("Desktop".into())).unwrap();
//! collector.submit_answer(1, Answer::Choice("Horizontal".into())).unwrap();
//! match collector.submit_answer(2, Answer::Number("5".into())).unwrap() {
//!     Progress::Complete(requirements) => assert_eq!(requirements.clearance_mm, 5.0),
//!     Progress::Next(_) => panic!("expected completion"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **Forward-Only**: accepted answers advance the step; there is no back
//!   transition
//! - **No Partial Records**: a rejected answer leaves the state untouched
//! - **Absent vs Empty**: questions the sequence never asked stay `None` in
//!   the completed record

pub mod collector;
pub mod error;
pub mod questions;
pub mod requirements;

// Re-export public API
pub use collector::{Answer, Collector, Progress};
pub use error::CollectError;
pub use questions::{question_sequence, AnswerKind, QuestionId, QuestionSpec};
pub use requirements::{Accessory, Cooling, MountType, MountingRequirements, Orientation};
