//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod assessment;
pub mod middleware;
mod router;

// Re-export key types for convenience
pub use assessment::{assessment_routes, companion_routes, AssessmentAppState};
pub use router::{api_router, health_check, RouterSettings};
