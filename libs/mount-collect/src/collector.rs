//! # Collector State Machine
//!
//! Folds one validated answer per step into an accumulating draft and hands
//! the completed record off exactly once.
//!
//! States are `Step(i)` for `i < N` plus terminal `Completed`. An accepted
//! answer advances `Step(i) → Step(i+1)`, the last one to `Completed`. A
//! rejected answer causes no transition. There is no back transition.

use std::collections::BTreeSet;

use mount_types::ProductType;

use crate::error::CollectError;
use crate::questions::{question_sequence, QuestionId, QuestionSpec};
use crate::requirements::{Accessory, Cooling, MountType, MountingRequirements, Orientation};

/// One submitted answer, in the shape the presentation layer delivers it.
///
/// Numeric input stays raw text until validation parses it.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Answer to a single-choice question.
    Choice(String),
    /// Raw text answer to a numeric question.
    Number(String),
    /// Answer to a multi-choice question; duplicates are tolerated and
    /// collapse into set membership.
    Selections(Vec<String>),
}

/// Outcome of an accepted answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// The session advanced; this is the next question to ask.
    Next(QuestionSpec),
    /// The session completed; the full record, handed off exactly once.
    Complete(MountingRequirements),
}

/// Answers accepted so far.
#[derive(Debug, Clone, Default)]
struct Draft {
    mount_type: Option<MountType>,
    cooling: Option<Cooling>,
    orientation: Option<Orientation>,
    clearance_mm: Option<f64>,
    accessories: Option<BTreeSet<Accessory>>,
}

impl Draft {
    /// Builds the completed record, verifying every asked question has an
    /// accepted answer. Fields for questions never asked stay `None`.
    fn finish(&self, sequence: &[QuestionSpec]) -> Result<MountingRequirements, CollectError> {
        for question in sequence {
            let answered = match question.id {
                QuestionId::MountType => self.mount_type.is_some(),
                QuestionId::Cooling => self.cooling.is_some(),
                QuestionId::Orientation => self.orientation.is_some(),
                QuestionId::Clearance => self.clearance_mm.is_some(),
                QuestionId::Accessories => self.accessories.is_some(),
            };
            if !answered {
                return Err(CollectError::MissingAnswer {
                    question: question.id,
                });
            }
        }
        let mount_type = self.mount_type.ok_or(CollectError::MissingAnswer {
            question: QuestionId::MountType,
        })?;
        let orientation = self.orientation.ok_or(CollectError::MissingAnswer {
            question: QuestionId::Orientation,
        })?;
        let clearance_mm = self.clearance_mm.ok_or(CollectError::MissingAnswer {
            question: QuestionId::Clearance,
        })?;
        Ok(MountingRequirements {
            mount_type,
            cooling: self.cooling,
            orientation,
            clearance_mm,
            accessories: self.accessories.clone(),
        })
    }
}

/// The questionnaire session for one product.
///
/// Every call is a function of (current state, accumulated answers, new
/// input); the collector holds no process-wide state.
#[derive(Debug, Clone)]
pub struct Collector {
    product_type: ProductType,
    sequence: Vec<QuestionSpec>,
    step: usize,
    draft: Draft,
    complete: bool,
}

impl Collector {
    /// Starts a session for the given product type.
    pub fn new(product_type: ProductType) -> Self {
        Self {
            product_type,
            sequence: question_sequence(product_type),
            step: 0,
            draft: Draft::default(),
            complete: false,
        }
    }

    /// The product type this session was parameterized with.
    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Zero-based index of the question awaiting an answer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&QuestionSpec> {
        if self.complete {
            None
        } else {
            self.sequence.get(self.step)
        }
    }

    /// Whether the session has handed off its record.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Validates and folds one answer for the question at `step`.
    ///
    /// `step` must match the current step; a mismatch is a conflict and the
    /// state is untouched, as it is on every validation failure.
    pub fn submit_answer(&mut self, step: usize, answer: Answer) -> Result<Progress, CollectError> {
        if self.complete {
            return Err(CollectError::AlreadyComplete);
        }
        if step != self.step {
            return Err(CollectError::StepConflict {
                expected: self.step,
                got: step,
            });
        }
        let question = match self.sequence.get(self.step) {
            Some(question) => question.clone(),
            None => return Err(CollectError::AlreadyComplete),
        };

        // Parse fully before touching the draft so rejection leaves state
        // unchanged.
        match question.id {
            QuestionId::MountType => {
                let value = expect_choice(&question, &answer)?;
                let parsed = MountType::from_label(value).ok_or_else(|| {
                    CollectError::UnknownOption {
                        question: question.id,
                        value: value.to_string(),
                    }
                })?;
                self.draft.mount_type = Some(parsed);
            }
            QuestionId::Cooling => {
                let value = expect_choice(&question, &answer)?;
                let parsed = Cooling::from_label(value).ok_or_else(|| {
                    CollectError::UnknownOption {
                        question: question.id,
                        value: value.to_string(),
                    }
                })?;
                self.draft.cooling = Some(parsed);
            }
            QuestionId::Orientation => {
                let value = expect_choice(&question, &answer)?;
                let parsed = Orientation::from_label(value).ok_or_else(|| {
                    CollectError::UnknownOption {
                        question: question.id,
                        value: value.to_string(),
                    }
                })?;
                self.draft.orientation = Some(parsed);
            }
            QuestionId::Clearance => {
                let raw = match &answer {
                    Answer::Number(raw) => raw,
                    _ => {
                        return Err(CollectError::WrongAnswerKind {
                            question: question.id,
                            expected: question.kind.name(),
                        })
                    }
                };
                let parsed: f64 = raw.trim().parse().map_err(|_| CollectError::InvalidNumber {
                    value: raw.clone(),
                })?;
                if !parsed.is_finite() {
                    return Err(CollectError::InvalidNumber { value: raw.clone() });
                }
                if parsed < 0.0 {
                    return Err(CollectError::NegativeClearance { value: parsed });
                }
                self.draft.clearance_mm = Some(parsed);
            }
            QuestionId::Accessories => {
                let values = match &answer {
                    Answer::Selections(values) => values,
                    _ => {
                        return Err(CollectError::WrongAnswerKind {
                            question: question.id,
                            expected: question.kind.name(),
                        })
                    }
                };
                let mut selected = BTreeSet::new();
                for value in values {
                    let parsed = Accessory::from_label(value).ok_or_else(|| {
                        CollectError::UnknownOption {
                            question: question.id,
                            value: value.clone(),
                        }
                    })?;
                    // Set insertion makes repeated toggles idempotent.
                    selected.insert(parsed);
                }
                self.draft.accessories = Some(selected);
            }
        }

        self.step += 1;
        if self.step == self.sequence.len() {
            self.complete = true;
            Ok(Progress::Complete(self.draft.finish(&self.sequence)?))
        } else {
            Ok(Progress::Next(self.sequence[self.step].clone()))
        }
    }
}

fn expect_choice<'a>(question: &QuestionSpec, answer: &'a Answer) -> Result<&'a str, CollectError> {
    match answer {
        Answer::Choice(value) => Ok(value.as_str()),
        _ => Err(CollectError::WrongAnswerKind {
            question: question.id,
            expected: question.kind.name(),
        }),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn answer_choice(value: &str) -> Answer {
        Answer::Choice(value.into())
    }

    /// Test a rejected single-choice answer never advances the step.
    #[test]
    fn test_unknown_option_does_not_advance() {
        let mut collector = Collector::new(ProductType::Accessory);
        let err = collector
            .submit_answer(0, answer_choice("Ceiling"))
            .unwrap_err();
        assert!(matches!(err, CollectError::UnknownOption { .. }));
        assert_eq!(collector.step(), 0);
        assert!(!collector.is_complete());
    }

    /// Test negative and non-numeric clearance answers are rejected in place.
    #[test]
    fn test_invalid_clearance_does_not_advance() {
        let mut collector = Collector::new(ProductType::Accessory);
        collector.submit_answer(0, answer_choice("Desktop")).unwrap();
        collector.submit_answer(1, answer_choice("Vertical")).unwrap();

        let err = collector
            .submit_answer(2, Answer::Number("-4".into()))
            .unwrap_err();
        assert_eq!(err, CollectError::NegativeClearance { value: -4.0 });
        assert_eq!(collector.step(), 2);

        let err = collector
            .submit_answer(2, Answer::Number("plenty".into()))
            .unwrap_err();
        assert_eq!(err, CollectError::InvalidNumber { value: "plenty".into() });
        assert_eq!(collector.step(), 2);

        let err = collector
            .submit_answer(2, Answer::Number("NaN".into()))
            .unwrap_err();
        assert!(matches!(err, CollectError::InvalidNumber { .. }));
        assert_eq!(collector.step(), 2);
    }

    /// Test clearance accepts decimal input with surrounding whitespace.
    #[test]
    fn test_clearance_parses_decimal() {
        let mut collector = Collector::new(ProductType::Accessory);
        collector.submit_answer(0, answer_choice("Desktop")).unwrap();
        collector.submit_answer(1, answer_choice("Vertical")).unwrap();
        match collector.submit_answer(2, Answer::Number(" 7.5 ".into())).unwrap() {
            Progress::Complete(requirements) => {
                assert_relative_eq!(requirements.clearance_mm, 7.5);
            }
            Progress::Next(_) => panic!("expected completion"),
        }
    }

    /// Test repeated multi-choice values collapse to set membership.
    #[test]
    fn test_multi_choice_is_idempotent() {
        let mut collector = Collector::new(ProductType::ComputeModule);
        collector.submit_answer(0, answer_choice("Wall")).unwrap();
        collector.submit_answer(1, answer_choice("Passive")).unwrap();
        collector.submit_answer(2, answer_choice("Vertical")).unwrap();
        collector.submit_answer(3, Answer::Number("5".into())).unwrap();
        let progress = collector
            .submit_answer(
                4,
                Answer::Selections(vec![
                    "Fan Mount".into(),
                    "Fan Mount".into(),
                    "Heat Sink".into(),
                ]),
            )
            .unwrap();
        match progress {
            Progress::Complete(requirements) => {
                let accessories = requirements.accessories.unwrap();
                assert_eq!(accessories.len(), 2);
                assert!(accessories.contains(&Accessory::FanMount));
            }
            Progress::Next(_) => panic!("expected completion"),
        }
    }

    /// Test a wrong-kind answer is rejected without a transition.
    #[test]
    fn test_wrong_kind_rejected() {
        let mut collector = Collector::new(ProductType::Accessory);
        let err = collector
            .submit_answer(0, Answer::Number("3".into()))
            .unwrap_err();
        assert_eq!(
            err,
            CollectError::WrongAnswerKind {
                question: QuestionId::MountType,
                expected: "single-choice",
            }
        );
        assert_eq!(collector.step(), 0);
    }

    /// Test the second of two submissions against one state conflicts.
    #[test]
    fn test_stale_step_conflicts() {
        let mut collector = Collector::new(ProductType::Accessory);
        collector.submit_answer(0, answer_choice("Desktop")).unwrap();
        let err = collector
            .submit_answer(0, answer_choice("Wall"))
            .unwrap_err();
        assert_eq!(err, CollectError::StepConflict { expected: 1, got: 0 });
        // The accepted answer stands.
        assert_eq!(collector.step(), 1);
    }

    /// Test submissions after completion are rejected.
    #[test]
    fn test_submission_after_completion_rejected() {
        let mut collector = Collector::new(ProductType::Accessory);
        collector.submit_answer(0, answer_choice("Desktop")).unwrap();
        collector.submit_answer(1, answer_choice("Vertical")).unwrap();
        collector.submit_answer(2, Answer::Number("0".into())).unwrap();
        assert!(collector.is_complete());
        assert_eq!(collector.current_question(), None);
        let err = collector
            .submit_answer(3, Answer::Number("1".into()))
            .unwrap_err();
        assert_eq!(err, CollectError::AlreadyComplete);
    }
}
