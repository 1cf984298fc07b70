//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Question bank, scoring, archetype classification
//! - `gamification` - XP, levels, streaks and achievements
//! - `membership` - Tiers and result visibility

pub mod assessment;
pub mod foundation;
pub mod gamification;
pub mod membership;
