//! Dimension scoring - maps an answer sequence to ten bounded scores.
//!
//! Each dimension is scored only from the options that actually weight it.
//! A dimension no chosen option touches sits at the neutral midpoint rather
//! than being dragged toward zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::question_bank::MAX_OPTION_WEIGHT;
use super::{AssessmentError, Dimension, QuestionBank};

/// Score assigned to a dimension no chosen option weighted.
pub const NEUTRAL_MIDPOINT: u8 = 50;

/// How a raw percentage is mapped into the reported band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationFormula {
    /// `pct * 0.8 + 20`, clamped to 35..=95.
    #[default]
    Compressed,
    /// `pct`, clamped to 35..=92.
    Linear,
}

impl NormalizationFormula {
    pub fn floor(&self) -> u8 {
        35
    }

    pub fn ceiling(&self) -> u8 {
        match self {
            NormalizationFormula::Compressed => 95,
            NormalizationFormula::Linear => 92,
        }
    }

    /// Version tag stamped on every result scored with this formula.
    pub fn version(&self) -> ScoringVersion {
        match self {
            NormalizationFormula::Compressed => ScoringVersion::CompressedV1,
            NormalizationFormula::Linear => ScoringVersion::LinearV1,
        }
    }

    /// Normalizes `sum / (count * MAX_OPTION_WEIGHT)` into the reported band.
    ///
    /// Works on the exact rational so half-up rounding never drifts on
    /// binary floating point. `count` must be non-zero.
    fn normalize(&self, sum: u32, count: u32) -> u8 {
        let denominator = u64::from(count) * u64::from(MAX_OPTION_WEIGHT);
        let sum = u64::from(sum);
        let rounded = match self {
            // 100 * s / d * 0.8 + 20 == 80 * s / d + 20
            NormalizationFormula::Compressed => 20 + round_half_up(80 * sum, denominator),
            NormalizationFormula::Linear => round_half_up(100 * sum, denominator),
        };
        // Clamp before narrowing; the band is always inside 0..=100.
        rounded.clamp(u64::from(self.floor()), u64::from(self.ceiling())) as u8
    }
}

impl fmt::Display for NormalizationFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationFormula::Compressed => write!(f, "compressed"),
            NormalizationFormula::Linear => write!(f, "linear"),
        }
    }
}

impl FromStr for NormalizationFormula {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compressed" => Ok(NormalizationFormula::Compressed),
            "linear" => Ok(NormalizationFormula::Linear),
            other => Err(AssessmentError::configuration(format!(
                "unknown scoring formula '{}'",
                other
            ))),
        }
    }
}

/// Identifies which normalization produced a stored result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringVersion {
    #[serde(rename = "compressed-v1")]
    CompressedV1,
    #[serde(rename = "linear-v1")]
    LinearV1,
}

impl ScoringVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringVersion::CompressedV1 => "compressed-v1",
            ScoringVersion::LinearV1 => "linear-v1",
        }
    }
}

impl fmt::Display for ScoringVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringVersion {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compressed-v1" => Ok(ScoringVersion::CompressedV1),
            "linear-v1" => Ok(ScoringVersion::LinearV1),
            other => Err(AssessmentError::configuration(format!(
                "unknown scoring version '{}'",
                other
            ))),
        }
    }
}

/// Scoring parameters. One formula per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub formula: NormalizationFormula,
}

impl ScoringConfig {
    pub fn new(formula: NormalizationFormula) -> Self {
        Self { formula }
    }

    pub fn floor(&self) -> u8 {
        self.formula.floor()
    }

    pub fn ceiling(&self) -> u8 {
        self.formula.ceiling()
    }

    pub fn version(&self) -> ScoringVersion {
        self.formula.version()
    }
}

/// Ten dimension scores plus their rounded mean.
///
/// Always holds every dimension. Serializes as
/// `{"dimensions": {"selfAwareness": 74, ...}, "overall": 64}` in canonical
/// dimension order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "DimensionScoresRepr", try_from = "DimensionScoresRepr")]
pub struct DimensionScores {
    values: [u8; Dimension::COUNT],
    overall: u8,
}

impl DimensionScores {
    /// Builds scores from a full set of values, computing the overall mean.
    pub fn from_values(values: [u8; Dimension::COUNT]) -> Self {
        let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
        let overall = round_half_up(total, Dimension::COUNT as u64) as u8;
        Self { values, overall }
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        self.values[dimension.index()]
    }

    pub fn overall(&self) -> u8 {
        self.overall
    }

    /// Scores paired with their dimension, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    pub fn min(&self) -> u8 {
        self.values.iter().copied().min().unwrap_or(NEUTRAL_MIDPOINT)
    }

    pub fn max(&self) -> u8 {
        self.values.iter().copied().max().unwrap_or(NEUTRAL_MIDPOINT)
    }

    /// Highest-scoring dimension. Ties go to the earliest in canonical order.
    pub fn strongest(&self) -> Dimension {
        let top = self.max();
        self.iter()
            .find(|&(_, v)| v == top)
            .map(|(d, _)| d)
            .unwrap_or(Dimension::SelfAwareness)
    }

    /// Lowest-scoring dimension. Ties go to the earliest in canonical order.
    pub fn weakest(&self) -> Dimension {
        let bottom = self.min();
        self.iter()
            .find(|&(_, v)| v == bottom)
            .map(|(d, _)| d)
            .unwrap_or(Dimension::SelfAwareness)
    }

    pub fn all_at_least(&self, threshold: u8) -> bool {
        self.values.iter().all(|&v| v >= threshold)
    }

    pub fn all_below(&self, threshold: u8) -> bool {
        self.values.iter().all(|&v| v < threshold)
    }
}

#[derive(Serialize, Deserialize)]
struct DimensionScoresRepr {
    dimensions: BTreeMap<Dimension, u8>,
    overall: u8,
}

impl From<DimensionScores> for DimensionScoresRepr {
    fn from(scores: DimensionScores) -> Self {
        Self {
            dimensions: scores.iter().collect(),
            overall: scores.overall,
        }
    }
}

impl TryFrom<DimensionScoresRepr> for DimensionScores {
    type Error = AssessmentError;

    fn try_from(repr: DimensionScoresRepr) -> Result<Self, Self::Error> {
        let mut values = [0u8; Dimension::COUNT];
        for dimension in Dimension::ALL {
            values[dimension.index()] = *repr.dimensions.get(&dimension).ok_or_else(|| {
                AssessmentError::configuration(format!("stored scores missing {}", dimension))
            })?;
        }
        // Stored results keep the overall they were issued with.
        Ok(Self {
            values,
            overall: repr.overall,
        })
    }
}

/// Computes dimension scores for an answer sequence. Reached only through
/// `generate_result`.
pub(crate) struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub(crate) fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Scores `answers` against `bank`.
    ///
    /// # Errors
    /// - `InvalidInput` if the sequence length differs from the bank or an
    ///   option index is out of range. The first offending question is
    ///   reported.
    pub(crate) fn score(
        &self,
        bank: &QuestionBank,
        answers: &[usize],
    ) -> Result<DimensionScores, AssessmentError> {
        bank.check_answers(answers)?;

        let mut sums = [0u32; Dimension::COUNT];
        let mut counts = [0u32; Dimension::COUNT];

        for (question, &option_index) in bank.questions().iter().zip(answers) {
            let option = &question.options[option_index];
            for (dimension, &weight) in &option.weights {
                sums[dimension.index()] += u32::from(weight);
                counts[dimension.index()] += 1;
            }
        }

        let mut values = [NEUTRAL_MIDPOINT; Dimension::COUNT];
        for i in 0..Dimension::COUNT {
            if counts[i] > 0 {
                values[i] = self.config.formula.normalize(sums[i], counts[i]);
            }
        }

        Ok(DimensionScores::from_values(values))
    }
}

/// Integer division rounding halves up, matching `floor(n / d + 0.5)`.
fn round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AnswerOption, InvalidInput, Question};

    fn single_question_bank(weights: &[(Dimension, u8)]) -> QuestionBank {
        QuestionBank::new(vec![Question::new(
            "q1",
            "?",
            vec![
                AnswerOption::new("weighted", weights),
                AnswerOption::new("silent", &[]),
            ],
        )])
        .unwrap()
    }

    #[test]
    fn round_half_up_matches_floor_plus_half() {
        assert_eq!(round_half_up(5, 10), 1);
        assert_eq!(round_half_up(4, 10), 0);
        assert_eq!(round_half_up(15, 10), 2);
        assert_eq!(round_half_up(25, 10), 3);
    }

    #[test]
    fn compressed_maps_full_weight_to_ceiling() {
        assert_eq!(NormalizationFormula::Compressed.normalize(5, 1), 95);
        assert_eq!(NormalizationFormula::Compressed.normalize(20, 4), 95);
    }

    #[test]
    fn compressed_clamps_low_end_to_floor() {
        // 20% * 0.8 + 20 = 36
        assert_eq!(NormalizationFormula::Compressed.normalize(1, 1), 36);
        // all-ones across many questions stays at 36, still above floor
        assert_eq!(NormalizationFormula::Compressed.normalize(7, 7), 36);
    }

    #[test]
    fn compressed_rounds_half_up() {
        // 80 * 9 / 20 = 36 exactly -> 56
        assert_eq!(NormalizationFormula::Compressed.normalize(9, 4), 56);
        // 80 * 7 / 10 = 56 -> 76
        assert_eq!(NormalizationFormula::Compressed.normalize(7, 2), 76);
        // 80 * 11 / 15 = 58.67 -> 79
        assert_eq!(NormalizationFormula::Compressed.normalize(11, 3), 79);
    }

    #[test]
    fn linear_uses_its_own_band() {
        assert_eq!(NormalizationFormula::Linear.normalize(5, 1), 92);
        assert_eq!(NormalizationFormula::Linear.normalize(1, 1), 35);
        assert_eq!(NormalizationFormula::Linear.normalize(3, 1), 60);
    }

    #[test]
    fn unweighted_dimensions_sit_at_midpoint() {
        let bank = single_question_bank(&[(Dimension::Purpose, 5)]);
        let scores = Scorer::new(ScoringConfig::default())
            .score(&bank, &[0])
            .unwrap();

        assert_eq!(scores.get(Dimension::Purpose), 95);
        for (dimension, value) in scores.iter() {
            if dimension != Dimension::Purpose {
                assert_eq!(value, NEUTRAL_MIDPOINT);
            }
        }
        // (95 + 9 * 50) / 10 = 54.5 -> 55
        assert_eq!(scores.overall(), 55);
    }

    #[test]
    fn silent_option_leaves_every_dimension_neutral() {
        let bank = single_question_bank(&[(Dimension::Purpose, 5)]);
        let scores = Scorer::new(ScoringConfig::default())
            .score(&bank, &[1])
            .unwrap();

        assert!(scores.iter().all(|(_, v)| v == NEUTRAL_MIDPOINT));
        assert_eq!(scores.overall(), NEUTRAL_MIDPOINT);
    }

    #[test]
    fn wrong_length_is_invalid_input() {
        let bank = single_question_bank(&[(Dimension::Purpose, 5)]);
        let err = Scorer::new(ScoringConfig::default())
            .score(&bank, &[])
            .unwrap_err();

        assert_eq!(
            err,
            AssessmentError::InvalidInput(InvalidInput::AnswerCountMismatch {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn strongest_and_weakest_break_ties_by_canonical_order() {
        let mut values = [60u8; Dimension::COUNT];
        values[Dimension::Discipline.index()] = 80;
        values[Dimension::Presence.index()] = 80;
        values[Dimension::Resilience.index()] = 40;
        values[Dimension::Purpose.index()] = 40;
        let scores = DimensionScores::from_values(values);

        assert_eq!(scores.strongest(), Dimension::Discipline);
        assert_eq!(scores.weakest(), Dimension::Resilience);
    }

    #[test]
    fn scores_serialize_in_canonical_order() {
        let scores = DimensionScores::from_values([70; Dimension::COUNT]);
        let json = serde_json::to_string(&scores).unwrap();

        assert!(json.starts_with(r#"{"dimensions":{"selfAwareness":70,"emotionalRegulation":70"#));
        assert!(json.ends_with(r#""presence":70},"overall":70}"#));

        let back: DimensionScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scores);
    }

    #[test]
    fn deserializing_incomplete_scores_fails() {
        let json = r#"{"dimensions":{"selfAwareness":70},"overall":70}"#;
        assert!(serde_json::from_str::<DimensionScores>(json).is_err());
    }

    #[test]
    fn formula_parses_from_config_string() {
        assert_eq!(
            "Linear".parse::<NormalizationFormula>().unwrap(),
            NormalizationFormula::Linear
        );
        assert!("cubic".parse::<NormalizationFormula>().is_err());
    }

    #[test]
    fn version_tag_round_trips_through_string() {
        for formula in [NormalizationFormula::Compressed, NormalizationFormula::Linear] {
            let tag = formula.version().to_string();
            assert_eq!(tag.parse::<ScoringVersion>().unwrap(), formula.version());
        }
    }
}
