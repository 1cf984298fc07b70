//! Tier-gated view of a stored assessment.

use serde::Serialize;

use super::{MembershipTier, TierLimits};
use crate::domain::assessment::{Dimension, ScoreLevel, ScoringVersion, StoredAssessment};
use crate::domain::foundation::{AssessmentId, Timestamp};

/// One dimension in an unlocked breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionView {
    pub dimension: Dimension,
    pub name: String,
    pub emoji: &'static str,
    pub score: u8,
    pub level: ScoreLevel,
}

/// What a user is shown for one of their results.
///
/// The engine always computes everything; locked parts are simply left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResultView {
    pub id: AssessmentId,
    pub archetype: String,
    pub archetype_label: &'static str,
    pub archetype_description: String,
    pub insight: String,
    pub overall: u8,
    pub scoring_version: ScoringVersion,
    pub taken_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<DimensionView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strongest: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakest: Option<Dimension>,
    pub breakdown_locked: bool,
}

impl AssessmentResultView {
    pub fn for_tier(stored: &StoredAssessment, tier: MembershipTier) -> Self {
        let limits = TierLimits::for_tier(tier);
        let result = &stored.result;
        let unlocked = limits.dimension_breakdown;

        let dimensions = unlocked.then(|| {
            result
                .scores
                .iter()
                .map(|(dimension, score)| DimensionView {
                    dimension,
                    name: dimension.display_name(),
                    emoji: dimension.emoji(),
                    score,
                    level: ScoreLevel::from_score(score),
                })
                .collect()
        });

        Self {
            id: stored.id,
            archetype: result.archetype.id().to_string(),
            archetype_label: result.archetype.label(),
            archetype_description: result.archetype_description.clone(),
            insight: result.insight.clone(),
            overall: result.overall(),
            scoring_version: result.scoring_version,
            taken_at: stored.taken_at,
            dimensions,
            strongest: unlocked.then(|| result.scores.strongest()),
            weakest: unlocked.then(|| result.scores.weakest()),
            breakdown_locked: !unlocked,
        }
    }
}
