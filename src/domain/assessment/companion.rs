//! Personalization payload handed to the conversational companion.

use serde::Serialize;
use std::fmt::Write;

use super::{AssessmentResult, Dimension, ScoreLevel};

/// One dimension line in the companion context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSummary {
    pub dimension: Dimension,
    pub display_name: String,
    pub score: u8,
    pub level: ScoreLevel,
}

/// Read-only summary of a user's latest result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionContext {
    pub archetype: String,
    pub overall: u8,
    pub dimensions: Vec<DimensionSummary>,
    pub strongest: Dimension,
    pub weakest: Dimension,
}

impl CompanionContext {
    pub fn from_result(result: &AssessmentResult) -> Self {
        let dimensions = result
            .scores
            .iter()
            .map(|(dimension, score)| DimensionSummary {
                dimension,
                display_name: dimension.display_name(),
                score,
                level: ScoreLevel::from_score(score),
            })
            .collect();

        Self {
            archetype: result.archetype.label().to_string(),
            overall: result.overall(),
            dimensions,
            strongest: result.scores.strongest(),
            weakest: result.scores.weakest(),
        }
    }

    /// Compact plain-text block.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Archetype: {}", self.archetype);
        let _ = writeln!(out, "Overall: {}/100", self.overall);
        for line in &self.dimensions {
            let _ = writeln!(out, "- {}: {}/100", line.display_name, line.score);
        }
        let _ = writeln!(out, "Strongest: {}", self.strongest.display_name());
        let _ = write!(out, "Growth edge: {}", self.weakest.display_name());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{generate_result, standard_question_bank, ScoringConfig};

    fn context() -> CompanionContext {
        let result = generate_result(
            &standard_question_bank(),
            &[1, 0, 1, 2, 3, 1, 3, 3, 1, 0],
            ScoringConfig::default(),
        )
        .unwrap();
        CompanionContext::from_result(&result)
    }

    #[test]
    fn summarizes_every_dimension_in_order() {
        let ctx = context();
        let order: Vec<_> = ctx.dimensions.iter().map(|d| d.dimension).collect();
        assert_eq!(order, Dimension::ALL.to_vec());
    }

    #[test]
    fn picks_strongest_and_weakest() {
        let ctx = context();
        assert_eq!(ctx.archetype, "The Overthinker");
        assert_eq!(ctx.strongest, Dimension::GrowthOrientation);
        assert_eq!(ctx.weakest, Dimension::EmotionalRegulation);
    }

    #[test]
    fn render_lists_display_names() {
        let text = context().render();
        assert!(text.starts_with("Archetype: The Overthinker\nOverall: 64/100\n"));
        assert!(text.contains("- Self Awareness: 74/100"));
        assert!(text.ends_with("Growth edge: Emotional Regulation"));
    }
}
