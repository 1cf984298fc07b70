//! Startup failures. Any of these stops the process before it binds.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::assessment::AssessmentError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read environment: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Could not read question bank {path}: {source}")]
    QuestionBankUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Question bank rejected: {0}")]
    QuestionBankInvalid(#[from] AssessmentError),
}

/// A value that parsed but cannot be used.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("LUCID__{0} must be set")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool needs 0 < max_connections and min_connections <= max_connections")]
    InvalidPoolSize,

    #[error("Pool max_connections is above 100")]
    PoolSizeTooLarge,

    #[error("JWT secret must be at least {0} bytes")]
    JwtSecretTooShort(usize),

    #[error("Mock authentication is not allowed in production")]
    MockAuthInProduction,

    #[error("Question bank path is empty")]
    EmptyQuestionBankPath,

    #[error("History page size must be between 1 and {0}")]
    InvalidHistoryLimit(u32),
}
