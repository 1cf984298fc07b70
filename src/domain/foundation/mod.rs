//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Lucid domain.

mod auth;
mod command;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use command::{CommandMetadata, CORRELATION_HEADER};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentId, UserId};
pub use timestamp::Timestamp;
