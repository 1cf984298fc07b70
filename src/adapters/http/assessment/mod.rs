//! HTTP adapter for the assessment module.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CompanionContextResponse, ErrorResponse, HealthResponse, HistoryParams, HistoryResponse,
    OptionResponse, QuestionResponse, QuestionsResponse, SubmitAssessmentRequest,
    SubmitAssessmentResponse,
};
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::{assessment_routes, companion_routes};
