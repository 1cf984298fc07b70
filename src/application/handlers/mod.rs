//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    GetAssessmentHistoryHandler, GetAssessmentHistoryQuery, GetAssessmentHistoryResult,
    GetCompanionContextHandler, GetCompanionContextQuery, GetCompanionContextResult,
    GetLatestAssessmentHandler, GetLatestAssessmentQuery, GetLatestAssessmentResult,
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
    DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT,
};
