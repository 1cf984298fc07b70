//! GetLatestAssessmentHandler - Query handler for a user's most recent result.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::membership::AssessmentResultView;
use crate::ports::{AssessmentHistoryRepository, MembershipReader};

/// Query for the latest assessment of a user.
#[derive(Debug, Clone)]
pub struct GetLatestAssessmentQuery {
    pub user_id: UserId,
}

pub type GetLatestAssessmentResult = AssessmentResultView;

/// Handler for retrieving the latest assessment.
pub struct GetLatestAssessmentHandler {
    history: Arc<dyn AssessmentHistoryRepository>,
    membership: Arc<dyn MembershipReader>,
}

impl GetLatestAssessmentHandler {
    pub fn new(
        history: Arc<dyn AssessmentHistoryRepository>,
        membership: Arc<dyn MembershipReader>,
    ) -> Self {
        Self {
            history,
            membership,
        }
    }

    /// # Errors
    ///
    /// - `AssessmentNotFound` if the user has never completed an assessment
    pub async fn handle(
        &self,
        query: GetLatestAssessmentQuery,
    ) -> Result<GetLatestAssessmentResult, DomainError> {
        let stored = self
            .history
            .latest_for_user(&query.user_id)
            .await?
            .ok_or_else(|| DomainError::assessment_not_found("No assessment has been completed yet"))?;

        let tier = self.membership.tier_for_user(&query.user_id).await?;
        Ok(AssessmentResultView::for_tier(&stored, tier))
    }
}
