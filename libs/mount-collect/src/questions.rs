//! # Question Sequences
//!
//! Pure construction of the ordered question list for a product type.
//!
//! The sequence is statically derivable: base order is mount type →
//! orientation → clearance, and compute modules additionally ask cooling
//! (after mount type) and accessories (after clearance). That conditional
//! insertion is the only branching here.

use std::fmt;

use serde::Serialize;

use mount_types::ProductType;

use crate::requirements::{Accessory, Cooling, MountType, Orientation};

/// Stable identifier of a question, used as the key when folding answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionId {
    /// Mounting style.
    MountType,
    /// Cooling strategy (compute modules only).
    Cooling,
    /// Product orientation.
    Orientation,
    /// Clearance in millimeters.
    Clearance,
    /// Accessory tags (compute modules only).
    Accessories,
}

impl QuestionId {
    /// The wire key identifying this question in serialized form.
    pub fn key(self) -> &'static str {
        match self {
            QuestionId::MountType => "mountType",
            QuestionId::Cooling => "cooling",
            QuestionId::Orientation => "orientation",
            QuestionId::Clearance => "clearance",
            QuestionId::Accessories => "accessories",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What shape of answer a question accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerKind {
    /// Exactly one value from the option set.
    SingleChoice {
        /// Valid option labels.
        options: Vec<&'static str>,
    },
    /// One non-negative real value.
    Numeric,
    /// A set of zero or more values from the option set.
    MultiChoice {
        /// Valid option labels.
        options: Vec<&'static str>,
    },
}

impl AnswerKind {
    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            AnswerKind::SingleChoice { .. } => "single-choice",
            AnswerKind::Numeric => "numeric",
            AnswerKind::MultiChoice { .. } => "multi-choice",
        }
    }
}

/// One question: identifier, prompt text, and accepted answer shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    /// Identifier keying the accumulated record.
    pub id: QuestionId,
    /// Prompt shown to the user.
    pub prompt: &'static str,
    /// Accepted answer shape.
    pub kind: AnswerKind,
}

/// Builds the ordered question sequence for a product type.
///
/// Deterministic: the same tag always yields the same sequence. Tags this
/// version does not recognize get the base sequence.
///
/// ## Example
///
/// ```rust
/// use mount_collect::{question_sequence, QuestionId};
/// use mount_types::ProductType;
///
/// let sequence = question_sequence(ProductType::ComputeModule);
/// assert_eq!(sequence.len(), 5);
/// assert_eq!(sequence[1].id, QuestionId::Cooling);
/// ```
pub fn question_sequence(product_type: ProductType) -> Vec<QuestionSpec> {
    match product_type {
        ProductType::ComputeModule => vec![
            mount_type_question(),
            cooling_question(),
            orientation_question(),
            clearance_question(),
            accessories_question(),
        ],
        ProductType::Accessory => base_sequence(),
        ProductType::Unknown => base_sequence(),
    }
}

fn base_sequence() -> Vec<QuestionSpec> {
    vec![
        mount_type_question(),
        orientation_question(),
        clearance_question(),
    ]
}

fn mount_type_question() -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::MountType,
        prompt: "How would you like to mount this?",
        kind: AnswerKind::SingleChoice {
            options: MountType::ALL.iter().map(|m| m.label()).collect(),
        },
    }
}

fn cooling_question() -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::Cooling,
        prompt: "What type of cooling do you need?",
        kind: AnswerKind::SingleChoice {
            options: Cooling::ALL.iter().map(|c| c.label()).collect(),
        },
    }
}

fn orientation_question() -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::Orientation,
        prompt: "What orientation do you need?",
        kind: AnswerKind::SingleChoice {
            options: Orientation::ALL.iter().map(|o| o.label()).collect(),
        },
    }
}

fn clearance_question() -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::Clearance,
        prompt: "How much clearance do you need (mm)?",
        kind: AnswerKind::Numeric,
    }
}

fn accessories_question() -> QuestionSpec {
    QuestionSpec {
        id: QuestionId::Accessories,
        prompt: "Additional features needed?",
        kind: AnswerKind::MultiChoice {
            options: Accessory::ALL.iter().map(|a| a.label()).collect(),
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================
