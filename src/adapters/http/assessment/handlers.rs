//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::assessment::{
    GetAssessmentHistoryHandler, GetAssessmentHistoryQuery, GetCompanionContextHandler,
    GetCompanionContextQuery, GetLatestAssessmentHandler, GetLatestAssessmentQuery,
    SubmitAssessmentCommand, SubmitAssessmentHandler, DEFAULT_HISTORY_LIMIT,
};
use crate::domain::assessment::{AnswerSequence, AssessmentEngine};
use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode, CORRELATION_HEADER};
use crate::domain::membership::AssessmentResultView;
use crate::ports::{AssessmentHistoryRepository, MembershipReader};

use super::dto::{
    CompanionContextResponse, ErrorResponse, HistoryParams, HistoryResponse, QuestionsResponse,
    SubmitAssessmentRequest, SubmitAssessmentResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for assessment routes.
///
/// Cloned per request; the engine shares its question bank and the ports
/// are Arc-wrapped.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub engine: AssessmentEngine,
    pub history_repository: Arc<dyn AssessmentHistoryRepository>,
    pub membership_reader: Arc<dyn MembershipReader>,
    pub history_page_size: u32,
}

impl AssessmentAppState {
    /// State with the default history page size.
    pub fn new(
        engine: AssessmentEngine,
        history_repository: Arc<dyn AssessmentHistoryRepository>,
        membership_reader: Arc<dyn MembershipReader>,
    ) -> Self {
        Self {
            engine,
            history_repository,
            membership_reader,
            history_page_size: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn with_history_page_size(mut self, page_size: u32) -> Self {
        self.history_page_size = page_size;
        self
    }

    pub fn submit_assessment_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(self.engine.clone(), self.history_repository.clone())
    }

    pub fn history_handler(&self) -> GetAssessmentHistoryHandler {
        GetAssessmentHistoryHandler::new(
            self.history_repository.clone(),
            self.membership_reader.clone(),
        )
        .with_default_limit(self.history_page_size)
    }

    pub fn latest_handler(&self) -> GetLatestAssessmentHandler {
        GetLatestAssessmentHandler::new(
            self.history_repository.clone(),
            self.membership_reader.clone(),
        )
    }

    pub fn companion_context_handler(&self) -> GetCompanionContextHandler {
        GetCompanionContextHandler::new(self.history_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/assessment/questions - The question bank without weights.
pub async fn get_questions(State(state): State<AssessmentAppState>) -> impl IntoResponse {
    Json(QuestionsResponse::from(state.engine.bank()))
}

/// POST /api/assessment/results - Score and record a completed assessment.
pub async fn submit_assessment(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Json(request): Json<SubmitAssessmentRequest>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let answers = to_answer_sequence(&request.answers);

    let metadata = CommandMetadata::new(user.id.clone()).with_correlation_id(
        headers
            .get(CORRELATION_HEADER)
            .and_then(|value| value.to_str().ok()),
    );
    let result = state
        .submit_assessment_handler()
        .handle(SubmitAssessmentCommand { answers }, metadata)
        .await
        .map_err(|err| restore_negative_option(err, &request.answers))?;

    let tier = state.membership_reader.tier_for_user(&user.id).await?;
    let response = SubmitAssessmentResponse::new(
        AssessmentResultView::for_tier(&result.assessment, tier),
        result.previous_overall,
        result.xp_awarded,
        &result.achievements_unlocked,
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/assessment/results - History, newest first, as the tier allows.
pub async fn get_history(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let result = state
        .history_handler()
        .handle(GetAssessmentHistoryQuery {
            user_id: user.id,
            limit: params.limit,
        })
        .await?;

    let has_locked_entries = result.has_locked_entries();
    Ok(Json(HistoryResponse {
        tier: result.tier,
        entries: result.entries,
        total_taken: result.total_taken,
        has_locked_entries,
    }))
}

/// GET /api/assessment/results/latest
pub async fn get_latest(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let view = state
        .latest_handler()
        .handle(GetLatestAssessmentQuery { user_id: user.id })
        .await?;
    Ok(Json(view))
}

/// GET /api/assessment/companion-context
pub async fn get_companion_context(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let context = state
        .companion_context_handler()
        .handle(GetCompanionContextQuery { user_id: user.id })
        .await?
        .ok_or_else(|| {
            AssessmentApiError::NotFound("No assessment has been completed yet".to_string())
        })?;
    Ok(Json(CompanionContextResponse::from(context)))
}

/// Negative indices can never name an option. They travel as `usize::MAX`
/// so the engine still reports the first offending question, and a wrong
/// length before any option problem.
fn to_answer_sequence(raw: &[i64]) -> AnswerSequence {
    AnswerSequence::new(
        raw.iter()
            .map(|&option_index| usize::try_from(option_index).unwrap_or(usize::MAX))
            .collect(),
    )
}

/// Puts the caller's negative index back into an out-of-range error.
fn restore_negative_option(err: DomainError, raw: &[i64]) -> DomainError {
    let negative = err
        .detail("option_index")
        .and(err.detail("question_index"))
        .and_then(|index| index.parse::<usize>().ok())
        .and_then(|question_index| {
            raw.get(question_index)
                .filter(|option_index| **option_index < 0)
                .map(|option_index| (question_index, *option_index))
        });
    let Some((question_index, option_index)) = negative else {
        return err;
    };

    let option_count = err.detail("option_count").unwrap_or("?").to_string();
    let mut err = err.with_detail("option_index", option_index.to_string());
    err.message = format!(
        "Option {} is out of range for question {} (valid: 0..{})",
        option_index, question_index, option_count
    );
    err
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for assessment endpoints.
#[derive(Debug)]
pub enum AssessmentApiError {
    InvalidAnswers {
        message: String,
        details: serde_json::Value,
    },
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Internal(String),
}

impl From<DomainError> for AssessmentApiError {
    fn from(err: DomainError) -> Self {
        if !err.code.is_caller_error() {
            tracing::error!(code = %err.code, "Assessment request failed: {}", err.message);
            return AssessmentApiError::Internal("An internal error occurred".to_string());
        }

        match err.code {
            ErrorCode::InvalidAnswers => AssessmentApiError::InvalidAnswers {
                details: details_json(&err),
                message: err.message,
            },
            ErrorCode::AssessmentNotFound => AssessmentApiError::NotFound(err.message),
            ErrorCode::Unauthorized | ErrorCode::Forbidden => {
                AssessmentApiError::Unauthorized(err.message)
            }
            _ => AssessmentApiError::BadRequest(err.message),
        }
    }
}

/// Error details as a camelCase JSON object; numeric values stay numeric.
fn details_json(err: &DomainError) -> serde_json::Value {
    let map = err
        .details
        .iter()
        .map(|(key, value)| {
            let value = value
                .parse::<i64>()
                .map(serde_json::Value::from)
                .unwrap_or_else(|_| serde_json::Value::from(value.clone()));
            (camel_case(key), value)
        })
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}

fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AssessmentApiError::InvalidAnswers { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new("INVALID_ANSWERS", message).with_details(details),
            ),
            AssessmentApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AssessmentApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg))
            }
            AssessmentApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::unauthorized(msg))
            }
            AssessmentApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{
        standard_question_bank, AssessmentEngine, AssessmentError, InvalidInput, ScoringConfig,
    };

    #[test]
    fn invalid_answers_map_to_422_with_camel_case_details() {
        let domain: DomainError = AssessmentError::from(InvalidInput::OptionOutOfRange {
            question_index: 3,
            option_index: 9,
            option_count: 4,
        })
        .into();

        let api = AssessmentApiError::from(domain);
        match &api {
            AssessmentApiError::InvalidAnswers { details, .. } => {
                assert_eq!(details["questionIndex"], 3);
                assert_eq!(details["optionIndex"], 9);
                assert_eq!(details["optionCount"], 4);
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
        assert_eq!(api.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    fn engine_error(answers: &[i64]) -> DomainError {
        let engine =
            AssessmentEngine::new(standard_question_bank(), ScoringConfig::default()).unwrap();
        let err = engine
            .generate(to_answer_sequence(answers).as_slice())
            .unwrap_err();
        restore_negative_option(err.into(), answers)
    }

    #[test]
    fn negative_option_keeps_its_value_and_position() {
        let err = engine_error(&[0, 1, -3, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(err.detail("question_index"), Some("2"));
        assert_eq!(err.detail("option_index"), Some("-3"));
        assert!(err.message.starts_with("Option -3 is out of range for question 2"));
        assert_eq!(details_json(&err)["optionIndex"], -3);
    }

    #[test]
    fn earlier_positive_overflow_wins_over_later_negative() {
        let err = engine_error(&[9, -1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(err.detail("question_index"), Some("0"));
        assert_eq!(err.detail("option_index"), Some("9"));
    }

    #[test]
    fn wrong_length_is_reported_even_with_negatives() {
        let err = engine_error(&[-1, 0, 0]);
        assert_eq!(err.detail("expected"), Some("10"));
        assert_eq!(err.detail("actual"), Some("3"));
        assert_eq!(err.detail("option_index"), None);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AssessmentApiError::from(DomainError::new(ErrorCode::AssessmentNotFound, "none"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_errors_are_hidden_behind_500() {
        let err = AssessmentApiError::from(DomainError::database("connection reset"));
        match &err {
            AssessmentApiError::Internal(msg) => assert!(!msg.contains("connection reset")),
            other => panic!("unexpected mapping: {:?}", other),
        }
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn negative_index_is_rejected_with_its_position() {
        let err = to_answer_sequence(&[0, 1, -2]).unwrap_err();
        match err {
            AssessmentApiError::InvalidAnswers { details, .. } => {
                assert_eq!(details["questionIndex"], 2);
                assert_eq!(details["optionIndex"], -2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn non_negative_indices_convert() {
        let answers = to_answer_sequence(&[0, 3, 2]).unwrap();
        assert_eq!(answers.as_slice(), &[0, 3, 2]);
    }

    #[test]
    fn camel_case_converts_snake_keys() {
        assert_eq!(camel_case("question_index"), "questionIndex");
        assert_eq!(camel_case("expected"), "expected");
    }
}
