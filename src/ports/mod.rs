//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentHistoryRepository` - Persistence of completed assessments
//! - `MembershipReader` - Tier lookup from the billing collaborator
//! - `SessionValidator` - Bearer token validation

mod assessment_history_repository;
mod membership_reader;
mod session_validator;

pub use assessment_history_repository::AssessmentHistoryRepository;
pub use membership_reader::MembershipReader;
pub use session_validator::{bearer_token, SessionValidator};
