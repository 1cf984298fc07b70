//! What each tier can see of its assessment results.

use super::MembershipTier;
use serde::{Deserialize, Serialize};

/// Result visibility limits for a membership tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    /// The tier these limits apply to.
    pub tier: MembershipTier,
    /// Maximum history entries returned. None = unlimited.
    pub max_history_entries: Option<u32>,
    /// Whether per-dimension scores are shown.
    pub dimension_breakdown: bool,
}

impl TierLimits {
    /// Get the limits for a specific tier.
    ///
    /// | Tier | History | Breakdown |
    /// |------|---------|-----------|
    /// | Free | 1 | No |
    /// | Premium | Unlimited | Yes |
    pub fn for_tier(tier: MembershipTier) -> Self {
        match tier {
            MembershipTier::Free => Self {
                tier,
                max_history_entries: Some(1),
                dimension_breakdown: false,
            },
            MembershipTier::Premium => Self {
                tier,
                max_history_entries: None,
                dimension_breakdown: true,
            },
        }
    }

    /// Applies the history cap to a requested page size.
    pub fn history_limit(&self, requested: u32) -> u32 {
        self.max_history_entries
            .map(|max| requested.min(max))
            .unwrap_or(requested)
    }
}
