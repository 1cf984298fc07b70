//! GetAssessmentHistoryHandler - Query handler for a user's past results.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::membership::{AssessmentResultView, MembershipTier, TierLimits};
use crate::ports::{AssessmentHistoryRepository, MembershipReader};

/// Default page size when the caller does not ask for one.
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Largest page a caller may ask for.
pub const MAX_HISTORY_LIMIT: u32 = 100;

/// Query to list a user's assessments, newest first.
#[derive(Debug, Clone)]
pub struct GetAssessmentHistoryQuery {
    pub user_id: UserId,
    pub limit: Option<u32>,
}

/// History as the user's tier allows them to see it.
#[derive(Debug, Clone)]
pub struct GetAssessmentHistoryResult {
    pub tier: MembershipTier,
    pub entries: Vec<AssessmentResultView>,
    /// Assessments taken in total, including ones hidden by the tier.
    pub total_taken: u64,
}

impl GetAssessmentHistoryResult {
    /// True when older results exist that the tier does not show.
    pub fn has_locked_entries(&self) -> bool {
        self.total_taken > self.entries.len() as u64
    }
}

/// Handler for retrieving assessment history.
pub struct GetAssessmentHistoryHandler {
    history: Arc<dyn AssessmentHistoryRepository>,
    membership: Arc<dyn MembershipReader>,
    default_limit: u32,
}

impl GetAssessmentHistoryHandler {
    pub fn new(
        history: Arc<dyn AssessmentHistoryRepository>,
        membership: Arc<dyn MembershipReader>,
    ) -> Self {
        Self {
            history,
            membership,
            default_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Page size used when the query leaves `limit` unset.
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit.clamp(1, MAX_HISTORY_LIMIT);
        self
    }

    pub async fn handle(
        &self,
        query: GetAssessmentHistoryQuery,
    ) -> Result<GetAssessmentHistoryResult, DomainError> {
        let tier = self.membership.tier_for_user(&query.user_id).await?;
        let requested = query
            .limit
            .unwrap_or(self.default_limit)
            .min(MAX_HISTORY_LIMIT);
        let limit = TierLimits::for_tier(tier).history_limit(requested);

        let records = self.history.list_for_user(&query.user_id, limit).await?;
        let total_taken = self.history.count_for_user(&query.user_id).await?;

        let entries = records
            .iter()
            .map(|stored| AssessmentResultView::for_tier(stored, tier))
            .collect();

        Ok(GetAssessmentHistoryResult {
            tier,
            entries,
            total_taken,
        })
    }
}
