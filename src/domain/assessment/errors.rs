//! Assessment engine error taxonomy.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Caller supplied an answer sequence that does not fit the question bank.
///
/// Always fatal to the single call; the engine never repairs input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("Question index {question_index} is out of range (bank has {question_count} questions)")]
    QuestionOutOfRange {
        question_index: usize,
        question_count: usize,
    },

    #[error(
        "Option {option_index} is out of range for question {question_index} \
         (valid: 0..{option_count})"
    )]
    OptionOutOfRange {
        question_index: usize,
        option_index: usize,
        option_count: usize,
    },

    #[error("Question {question_index} has not been answered")]
    Unanswered { question_index: usize },
}

impl InvalidInput {
    /// The question the error points at, if any.
    pub fn question_index(&self) -> Option<usize> {
        match self {
            InvalidInput::AnswerCountMismatch { .. } => None,
            InvalidInput::QuestionOutOfRange { question_index, .. }
            | InvalidInput::OptionOutOfRange { question_index, .. }
            | InvalidInput::Unanswered { question_index } => Some(*question_index),
        }
    }
}

/// Errors produced by the assessment engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// The question bank or rule table is malformed. Deployment defect.
    #[error("Assessment configuration invalid: {reason}")]
    ConfigurationInvariantViolation { reason: String },
}

impl AssessmentError {
    /// Creates a configuration invariant violation.
    pub fn configuration(reason: impl Into<String>) -> Self {
        AssessmentError::ConfigurationInvariantViolation {
            reason: reason.into(),
        }
    }

    /// Returns true if the caller should re-collect answers.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AssessmentError::InvalidInput(_))
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        match &err {
            AssessmentError::InvalidInput(input) => {
                let base = DomainError::new(ErrorCode::InvalidAnswers, err.to_string());
                match *input {
                    InvalidInput::AnswerCountMismatch { expected, actual } => base
                        .with_detail("expected", expected.to_string())
                        .with_detail("actual", actual.to_string()),
                    InvalidInput::QuestionOutOfRange {
                        question_index,
                        question_count,
                    } => base
                        .with_detail("question_index", question_index.to_string())
                        .with_detail("question_count", question_count.to_string()),
                    InvalidInput::OptionOutOfRange {
                        question_index,
                        option_index,
                        option_count,
                    } => base
                        .with_detail("question_index", question_index.to_string())
                        .with_detail("option_index", option_index.to_string())
                        .with_detail("option_count", option_count.to_string()),
                    InvalidInput::Unanswered { question_index } => {
                        base.with_detail("question_index", question_index.to_string())
                    }
                }
            }
            AssessmentError::ConfigurationInvariantViolation { .. } => {
                DomainError::new(ErrorCode::InvalidQuestionBank, err.to_string())
            }
        }
    }
}
