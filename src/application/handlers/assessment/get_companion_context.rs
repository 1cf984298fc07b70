//! GetCompanionContextHandler - Personalization payload for the AI companion.
//!
//! The companion always receives the full breakdown regardless of tier; it
//! is consumed server-side and never shown to the user directly.

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::CompanionContext;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentHistoryRepository;

/// Query for the companion context of a user.
#[derive(Debug, Clone)]
pub struct GetCompanionContextQuery {
    pub user_id: UserId,
}

/// `None` when the user has not completed an assessment yet.
pub type GetCompanionContextResult = Option<CompanionContext>;

/// Handler for building companion context.
pub struct GetCompanionContextHandler {
    history: Arc<dyn AssessmentHistoryRepository>,
}

impl GetCompanionContextHandler {
    pub fn new(history: Arc<dyn AssessmentHistoryRepository>) -> Self {
        Self { history }
    }

    pub async fn handle(
        &self,
        query: GetCompanionContextQuery,
    ) -> Result<GetCompanionContextResult, DomainError> {
        let latest = self.history.latest_for_user(&query.user_id).await?;
        if latest.is_none() {
            debug!(user_id = %query.user_id, "No assessment for companion context");
        }
        Ok(latest.map(|stored| CompanionContext::from_result(&stored.result)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAssessmentHistory;
    use crate::domain::assessment::{
        generate_result, standard_question_bank, AnswerSequence, Dimension, ScoringConfig,
        StoredAssessment,
    };

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    #[tokio::test]
    async fn builds_context_from_latest_result() {
        let history = Arc::new(InMemoryAssessmentHistory::new());
        let answers = vec![1, 0, 1, 2, 3, 1, 3, 3, 1, 0];
        let result =
            generate_result(&standard_question_bank(), &answers, ScoringConfig::default()).unwrap();
        history
            .save(&StoredAssessment::new(
                test_user_id(),
                AnswerSequence::new(answers),
                result,
            ))
            .await
            .unwrap();

        let handler = GetCompanionContextHandler::new(history);
        let context = handler
            .handle(GetCompanionContextQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(context.archetype, "The Overthinker");
        assert_eq!(context.overall, 64);
        assert_eq!(context.dimensions.len(), Dimension::COUNT);
        assert_eq!(context.weakest, Dimension::EmotionalRegulation);
        assert_eq!(context.strongest, Dimension::GrowthOrientation);
    }

    #[tokio::test]
    async fn none_without_assessment() {
        let handler = GetCompanionContextHandler::new(Arc::new(InMemoryAssessmentHistory::new()));
        let context = handler
            .handle(GetCompanionContextQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap();
        assert!(context.is_none());
    }
}
