//! Error types shared across layers.
//!
//! Each layer has its own thiserror enum; they all funnel into `DomainError`
//! before reaching an application handler's caller.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Value object construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' is longer than {max} characters")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } | ValidationError::TooLong { field, .. } => {
                field
            }
        }
    }
}

/// Machine-readable error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    /// Answer sequence does not fit the question bank
    InvalidAnswers,
    AssessmentNotFound,
    /// Deployment defect: bank or rule table malformed
    InvalidQuestionBank,
    Unauthorized,
    Forbidden,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidAnswers => "INVALID_ANSWERS",
            ErrorCode::AssessmentNotFound => "ASSESSMENT_NOT_FOUND",
            ErrorCode::InvalidQuestionBank => "INVALID_QUESTION_BANK",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// True when the caller can fix the request; false for server faults.
    pub fn is_caller_error(&self) -> bool {
        !matches!(
            self,
            ErrorCode::InvalidQuestionBank | ErrorCode::DatabaseError | ErrorCode::InternalError
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error crossing a layer boundary: a code, a message and string details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn assessment_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AssessmentNotFound, message)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation(err.field().to_string(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(
            ValidationError::empty_field("user_id").to_string(),
            "Field 'user_id' cannot be empty"
        );
        assert_eq!(
            ValidationError::too_long("user_id", 128).to_string(),
            "Field 'user_id' is longer than 128 characters"
        );
    }

    #[test]
    fn validation_error_converts_with_field_detail() {
        let err: DomainError = ValidationError::too_long("user_id", 128).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field"), Some("user_id"));
        assert!(err.message().contains("128"));
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::assessment_not_found("No assessment yet");
        assert_eq!(err.to_string(), "[ASSESSMENT_NOT_FOUND] No assessment yet");
    }

    #[test]
    fn details_accumulate_and_overwrite() {
        let err = DomainError::new(ErrorCode::InvalidAnswers, "Bad answer")
            .with_detail("question_index", "3")
            .with_detail("question_index", "4")
            .with_detail("option_count", "4");

        assert_eq!(err.detail("question_index"), Some("4"));
        assert_eq!(err.detail("option_count"), Some("4"));
        assert_eq!(err.detail("missing"), None);
    }

    #[test]
    fn server_faults_are_not_caller_errors() {
        assert!(ErrorCode::InvalidAnswers.is_caller_error());
        assert!(ErrorCode::AssessmentNotFound.is_caller_error());
        assert!(!ErrorCode::DatabaseError.is_caller_error());
        assert!(!ErrorCode::InvalidQuestionBank.is_caller_error());
    }
}
