//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresAssessmentHistoryRepository` - Completed assessments, newest first
//!
//! Schema lives in `migrations/` and is applied at startup.

mod assessment_history_repository;

pub use assessment_history_repository::PostgresAssessmentHistoryRepository;
