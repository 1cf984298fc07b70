//! In-memory adapters for development and tests.

mod assessment_history;
mod membership_reader;

pub use assessment_history::InMemoryAssessmentHistory;
pub use membership_reader::InMemoryMembershipReader;
