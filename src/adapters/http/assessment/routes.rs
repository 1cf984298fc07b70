//! Axum router configuration for assessment endpoints.

use axum::{
    routing::get,
    Router,
};

use super::handlers::{
    get_companion_context, get_history, get_latest, get_questions, submit_assessment,
    AssessmentAppState,
};

/// Create the assessment API router, mounted at `/api/assessment`.
///
/// # Routes
///
/// ## Public
/// - `GET /questions` - Question bank without weights
///
/// ## Authenticated
/// - `POST /results` - Submit a completed answer sequence
/// - `GET /results` - History, gated by tier
/// - `GET /results/latest` - Most recent result
pub fn assessment_routes() -> Router<AssessmentAppState> {
    Router::new()
        .route("/questions", get(get_questions))
        .route("/results", get(get_history).post(submit_assessment))
        .route("/results/latest", get(get_latest))
}

/// Personalization payload for the AI companion, also under `/api/assessment`.
///
/// - `GET /companion-context` (authenticated)
pub fn companion_routes() -> Router<AssessmentAppState> {
    Router::new().route("/companion-context", get(get_companion_context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::memory::{InMemoryAssessmentHistory, InMemoryMembershipReader};
    use crate::domain::assessment::{standard_question_bank, AssessmentEngine, ScoringConfig};

    fn test_state() -> AssessmentAppState {
        AssessmentAppState::new(
            AssessmentEngine::new(standard_question_bank(), ScoringConfig::default()).unwrap(),
            Arc::new(InMemoryAssessmentHistory::new()),
            Arc::new(InMemoryMembershipReader::default()),
        )
    }

    #[test]
    fn assessment_routes_creates_router() {
        let _: Router<()> = assessment_routes().with_state(test_state());
    }

    #[test]
    fn combined_routes_create_router() {
        let _: Router<()> = assessment_routes()
            .merge(companion_routes())
            .with_state(test_state());
    }
}
