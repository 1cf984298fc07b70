//! In-memory membership tiers.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::membership::MembershipTier;
use crate::ports::MembershipReader;

/// Tier table keyed by user. Unknown users get the default tier.
#[derive(Debug, Clone)]
pub struct InMemoryMembershipReader {
    tiers: Arc<RwLock<HashMap<UserId, MembershipTier>>>,
    default_tier: MembershipTier,
}

impl InMemoryMembershipReader {
    pub fn new(default_tier: MembershipTier) -> Self {
        Self {
            tiers: Arc::new(RwLock::new(HashMap::new())),
            default_tier,
        }
    }

    pub async fn set_tier(&self, user_id: UserId, tier: MembershipTier) {
        self.tiers.write().await.insert(user_id, tier);
    }
}

impl Default for InMemoryMembershipReader {
    fn default() -> Self {
        Self::new(MembershipTier::Free)
    }
}

#[async_trait]
impl MembershipReader for InMemoryMembershipReader {
    async fn tier_for_user(&self, user_id: &UserId) -> Result<MembershipTier, DomainError> {
        Ok(self
            .tiers
            .read()
            .await
            .get(user_id)
            .copied()
            .unwrap_or(self.default_tier))
    }
}
