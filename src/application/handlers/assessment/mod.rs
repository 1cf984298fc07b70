//! Assessment handlers.
//!
//! ## Commands
//! - Submitting a completed answer sequence
//!
//! ## Queries
//! - Assessment history (tier gated)
//! - Latest assessment
//! - Companion context for the conversational AI

mod get_assessment_history;
mod get_companion_context;
mod get_latest_assessment;
mod submit_assessment;

// Commands
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};

// Queries
pub use get_assessment_history::{
    GetAssessmentHistoryHandler, GetAssessmentHistoryQuery, GetAssessmentHistoryResult,
    DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT,
};
pub use get_companion_context::{
    GetCompanionContextHandler, GetCompanionContextQuery, GetCompanionContextResult,
};
pub use get_latest_assessment::{
    GetLatestAssessmentHandler, GetLatestAssessmentQuery, GetLatestAssessmentResult,
};
