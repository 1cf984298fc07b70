//! Assessment history repository port.
//!
//! Completed assessments are append-only: a retake adds a new record and
//! never rewrites an old one.

use crate::domain::assessment::StoredAssessment;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Repository port for completed assessments.
#[async_trait]
pub trait AssessmentHistoryRepository: Send + Sync {
    /// Append a completed assessment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, assessment: &StoredAssessment) -> Result<(), DomainError>;

    /// A user's assessments, newest first, at most `limit` entries.
    ///
    /// Equal `taken_at` values keep insertion order: the later save lists
    /// first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<StoredAssessment>, DomainError>;

    /// The user's most recent assessment, if any.
    async fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StoredAssessment>, DomainError>;

    /// Number of assessments the user has taken.
    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, DomainError>;
}
