//! Persisted assessment record.

use serde::{Deserialize, Serialize};

use super::{AnswerSequence, AssessmentResult};
use crate::domain::foundation::{AssessmentId, Timestamp, UserId};

/// A completed assessment saved to a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAssessment {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub answers: AnswerSequence,
    pub result: AssessmentResult,
    pub taken_at: Timestamp,
}

impl StoredAssessment {
    pub fn new(user_id: UserId, answers: AnswerSequence, result: AssessmentResult) -> Self {
        Self {
            id: AssessmentId::new(),
            user_id,
            answers,
            result,
            taken_at: Timestamp::now(),
        }
    }

    /// Overrides the timestamp, for imports and tests.
    pub fn taken_at(mut self, taken_at: Timestamp) -> Self {
        self.taken_at = taken_at;
        self
    }

    pub fn overall(&self) -> u8 {
        self.result.overall()
    }
}
