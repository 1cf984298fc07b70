//! Membership reader port.
//!
//! Subscriptions are managed by the billing collaborator; the assessment
//! service only needs to know which tier a user is on.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::membership::MembershipTier;
use async_trait::async_trait;

/// Reader port for a user's membership tier.
#[async_trait]
pub trait MembershipReader: Send + Sync {
    /// Current tier for a user. Users without a membership are Free.
    async fn tier_for_user(&self, user_id: &UserId) -> Result<MembershipTier, DomainError>;
}
