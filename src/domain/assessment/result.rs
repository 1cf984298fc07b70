//! Result assembly - scores, archetype and narrative in one value.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{
    describe, Archetype, ArchetypeClassifier, AssessmentError, DimensionScores, QuestionBank,
    Scorer, ScoringConfig, ScoringVersion,
};

/// Complete outcome of one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub scores: DimensionScores,
    pub archetype: Archetype,
    pub archetype_description: String,
    pub insight: String,
    pub scoring_version: ScoringVersion,
}

impl AssessmentResult {
    pub fn overall(&self) -> u8 {
        self.scores.overall()
    }
}

/// Scores, classifies and describes answers in one call.
///
/// Pure function of its inputs: the same bank, config and answers always
/// produce the same result.
pub fn generate_result(
    bank: &QuestionBank,
    answers: &[usize],
    config: ScoringConfig,
) -> Result<AssessmentResult, AssessmentError> {
    let scores = Scorer::new(config).score(bank, answers)?;
    let archetype = ArchetypeClassifier::classify(&scores);
    let narrative = describe(archetype);

    Ok(AssessmentResult {
        scores,
        archetype,
        archetype_description: narrative.description.to_string(),
        insight: narrative.insight.to_string(),
        scoring_version: config.version(),
    })
}

/// A question bank bound to a scoring configuration.
///
/// Cheap to clone; the bank is shared, never copied per request.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    bank: Arc<QuestionBank>,
    config: ScoringConfig,
}

impl AssessmentEngine {
    /// Creates an engine after checking the bank and rule table.
    pub fn new(bank: Arc<QuestionBank>, config: ScoringConfig) -> Result<Self, AssessmentError> {
        bank.validate()?;
        ArchetypeClassifier::validate_rule_table()?;
        Ok(Self { bank, config })
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    pub fn generate(&self, answers: &[usize]) -> Result<AssessmentResult, AssessmentError> {
        generate_result(&self.bank, answers, self.config)
    }
}
