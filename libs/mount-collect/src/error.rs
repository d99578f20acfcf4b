//! # Collection Errors
//!
//! Error types for the questionnaire state machine. All are recoverable at
//! the session level: a rejected answer leaves the collector unchanged and
//! the caller re-prompts the same step.

use thiserror::Error;

use crate::questions::QuestionId;

/// Errors that can occur while collecting answers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CollectError {
    /// The submitted value is not in the question's option set.
    #[error("'{value}' is not an option for {question}")]
    UnknownOption {
        /// The question being answered.
        question: QuestionId,
        /// The rejected value.
        value: String,
    },

    /// The answer shape does not match the question's declared kind.
    #[error("{question} expects a {expected} answer")]
    WrongAnswerKind {
        /// The question being answered.
        question: QuestionId,
        /// The expected kind name.
        expected: &'static str,
    },

    /// Numeric input did not parse to a finite real.
    #[error("'{value}' is not a number")]
    InvalidNumber {
        /// The rejected raw input.
        value: String,
    },

    /// Numeric input parsed but is negative.
    #[error("clearance must be non-negative, got {value}")]
    NegativeClearance {
        /// The rejected parsed value.
        value: f64,
    },

    /// The answer targeted a step other than the current one. Raised when
    /// two submissions race against the same state; the loser sees this.
    #[error("answer targets step {got} but the session is at step {expected}")]
    StepConflict {
        /// The collector's current step.
        expected: usize,
        /// The step the caller tried to answer.
        got: usize,
    },

    /// The questionnaire already completed and handed off its record.
    #[error("questionnaire already complete")]
    AlreadyComplete,

    /// Completion found a required answer missing. Indicates a sequence
    /// bookkeeping bug rather than bad user input.
    #[error("missing answer for {question}")]
    MissingAnswer {
        /// The unanswered question.
        question: QuestionId,
    },
}

// =============================================================================
// TESTS
// =============================================================================
