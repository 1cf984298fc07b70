//! Membership domain module.
//!
//! Decides how much of an assessment result a user may see.
//!
//! # Module Structure
//!
//! - `tier` - MembershipTier subscription levels
//! - `tier_limits` - Result visibility per tier
//! - `result_view` - Tier-gated result read model

mod result_view;
mod tier;
mod tier_limits;

pub use result_view::{AssessmentResultView, DimensionView};
pub use tier::MembershipTier;
pub use tier_limits::TierLimits;
