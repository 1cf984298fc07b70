//! Archetype classification.
//!
//! An ordered rule table is evaluated top to bottom and the first match
//! wins. When nothing matches, the weakest dimension picks the archetype
//! through a fallback table, so every score vector classifies.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{AssessmentError, Dimension, DimensionScores};

/// Every dimension at or above this is Integrated.
pub const INTEGRATED_THRESHOLD: u8 = 70;

/// A dimension below this counts as low.
pub const LOW_THRESHOLD: u8 = 55;

/// A dimension at or above this counts as high.
pub const HIGH_THRESHOLD: u8 = 65;

/// Mindset profile assigned to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Archetype {
    Integrated,
    Dormant,
    Overthinker,
    Performer,
    Grinder,
    Reactor,
    Drifter,
    Phoenix,
}

impl Archetype {
    pub const ALL: [Archetype; 8] = [
        Archetype::Integrated,
        Archetype::Dormant,
        Archetype::Overthinker,
        Archetype::Performer,
        Archetype::Grinder,
        Archetype::Reactor,
        Archetype::Drifter,
        Archetype::Phoenix,
    ];

    /// Display label, e.g. "The Overthinker".
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Integrated => "The Integrated",
            Archetype::Dormant => "The Dormant",
            Archetype::Overthinker => "The Overthinker",
            Archetype::Performer => "The Performer",
            Archetype::Grinder => "The Grinder",
            Archetype::Reactor => "The Reactor",
            Archetype::Drifter => "The Drifter",
            Archetype::Phoenix => "The Phoenix",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Archetype::Integrated => "integrated",
            Archetype::Dormant => "dormant",
            Archetype::Overthinker => "overthinker",
            Archetype::Performer => "performer",
            Archetype::Grinder => "grinder",
            Archetype::Reactor => "reactor",
            Archetype::Drifter => "drifter",
            Archetype::Phoenix => "phoenix",
        }
    }

    pub fn from_id(id: &str) -> Option<Archetype> {
        Archetype::ALL.into_iter().find(|a| a.id() == id)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A predicate over scores that assigns an archetype when it holds.
pub struct ArchetypeRule {
    pub archetype: Archetype,
    pub condition: &'static str,
    matches: fn(&DimensionScores) -> bool,
}

impl ArchetypeRule {
    pub fn matches(&self, scores: &DimensionScores) -> bool {
        (self.matches)(scores)
    }
}

impl fmt::Debug for ArchetypeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchetypeRule")
            .field("archetype", &self.archetype)
            .field("condition", &self.condition)
            .finish()
    }
}

fn low(scores: &DimensionScores, d: Dimension) -> bool {
    scores.get(d) < LOW_THRESHOLD
}

fn high(scores: &DimensionScores, d: Dimension) -> bool {
    scores.get(d) >= HIGH_THRESHOLD
}

/// Classification rules in priority order.
pub static ARCHETYPE_RULES: [ArchetypeRule; 8] = [
    ArchetypeRule {
        archetype: Archetype::Integrated,
        condition: "every dimension >= 70",
        matches: |s| s.all_at_least(INTEGRATED_THRESHOLD),
    },
    ArchetypeRule {
        archetype: Archetype::Dormant,
        condition: "every dimension < 55",
        matches: |s| s.all_below(LOW_THRESHOLD),
    },
    ArchetypeRule {
        archetype: Archetype::Overthinker,
        condition: "selfAwareness >= 65 and emotionalRegulation < 55",
        matches: |s| high(s, Dimension::SelfAwareness) && low(s, Dimension::EmotionalRegulation),
    },
    ArchetypeRule {
        archetype: Archetype::Performer,
        condition: "confidence >= 65 and authenticity < 55",
        matches: |s| high(s, Dimension::Confidence) && low(s, Dimension::Authenticity),
    },
    ArchetypeRule {
        archetype: Archetype::Grinder,
        condition: "max(discipline, resilience) >= 65 and selfAwareness < 55",
        matches: |s| {
            (high(s, Dimension::Discipline) || high(s, Dimension::Resilience))
                && low(s, Dimension::SelfAwareness)
        },
    },
    ArchetypeRule {
        archetype: Archetype::Reactor,
        condition: "growthOrientation >= 65 and emotionalRegulation < 55",
        matches: |s| high(s, Dimension::GrowthOrientation) && low(s, Dimension::EmotionalRegulation),
    },
    ArchetypeRule {
        archetype: Archetype::Drifter,
        condition: "purpose < 55 and discipline < 55 and 55 <= selfAwareness < 70",
        matches: |s| {
            let sa = s.get(Dimension::SelfAwareness);
            low(s, Dimension::Purpose)
                && low(s, Dimension::Discipline)
                && (LOW_THRESHOLD..INTEGRATED_THRESHOLD).contains(&sa)
        },
    },
    ArchetypeRule {
        archetype: Archetype::Phoenix,
        condition: "growthOrientation >= 65 and resilience >= 65",
        matches: |s| high(s, Dimension::GrowthOrientation) && high(s, Dimension::Resilience),
    },
];

/// Weakest-dimension fallback, in tie-break order.
pub static FALLBACK_TABLE: [(Dimension, Archetype); Dimension::COUNT] = [
    (Dimension::EmotionalRegulation, Archetype::Reactor),
    (Dimension::SelfAwareness, Archetype::Grinder),
    (Dimension::Authenticity, Archetype::Performer),
    (Dimension::Purpose, Archetype::Drifter),
    (Dimension::Discipline, Archetype::Drifter),
    (Dimension::Resilience, Archetype::Overthinker),
    (Dimension::InnerDialogue, Archetype::Overthinker),
    (Dimension::Presence, Archetype::Overthinker),
    (Dimension::Confidence, Archetype::Dormant),
    (Dimension::GrowthOrientation, Archetype::Dormant),
];

/// Used only if the fallback table names no minimal dimension.
pub const DEFAULT_ARCHETYPE: Archetype = Archetype::Dormant;

/// How a classification was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationPath {
    /// Rule at this index of [`ARCHETYPE_RULES`] matched.
    Rule(usize),
    /// No rule matched; this was the weakest dimension.
    Fallback(Dimension),
    /// Neither rules nor fallback applied.
    Default,
}

/// Archetype together with the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub archetype: Archetype,
    pub path: ClassificationPath,
}

impl Classification {
    pub fn via_rule(&self) -> bool {
        matches!(self.path, ClassificationPath::Rule(_))
    }
}

/// Assigns archetypes to score vectors.
pub struct ArchetypeClassifier;

impl ArchetypeClassifier {
    /// Classifies scores. Total: always returns an archetype.
    pub(crate) fn classify(scores: &DimensionScores) -> Archetype {
        Self::classify_with_path(scores).archetype
    }

    /// Classifies scores and reports which rule or fallback decided.
    pub fn classify_with_path(scores: &DimensionScores) -> Classification {
        if let Some((index, rule)) = ARCHETYPE_RULES
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(scores))
        {
            return Classification {
                archetype: rule.archetype,
                path: ClassificationPath::Rule(index),
            };
        }

        let weakest = scores.min();
        FALLBACK_TABLE
            .iter()
            .find(|(dimension, _)| scores.get(*dimension) == weakest)
            .map(|&(dimension, archetype)| Classification {
                archetype,
                path: ClassificationPath::Fallback(dimension),
            })
            .unwrap_or(Classification {
                archetype: DEFAULT_ARCHETYPE,
                path: ClassificationPath::Default,
            })
    }

    /// Checks that the rule table and fallback table are well-formed.
    ///
    /// The fallback must name every dimension exactly once.
    pub fn validate_rule_table() -> Result<(), AssessmentError> {
        if ARCHETYPE_RULES.is_empty() {
            return Err(AssessmentError::configuration("archetype rule table is empty"));
        }

        let mut seen = HashSet::new();
        for (dimension, _) in FALLBACK_TABLE.iter() {
            if !seen.insert(*dimension) {
                return Err(AssessmentError::configuration(format!(
                    "fallback table lists {} twice",
                    dimension
                )));
            }
        }
        if let Some(missing) = Dimension::ALL.iter().find(|d| !seen.contains(d)) {
            return Err(AssessmentError::configuration(format!(
                "fallback table is missing {}",
                missing
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_with(base: u8, overrides: &[(Dimension, u8)]) -> DimensionScores {
        let mut values = [base; Dimension::COUNT];
        for &(dimension, value) in overrides {
            values[dimension.index()] = value;
        }
        DimensionScores::from_values(values)
    }

    #[test]
    fn rule_table_is_valid() {
        ArchetypeClassifier::validate_rule_table().unwrap();
    }

    #[test]
    fn all_high_is_integrated() {
        assert_eq!(
            ArchetypeClassifier::classify(&scores_with(70, &[])),
            Archetype::Integrated
        );
    }

    #[test]
    fn one_dimension_below_seventy_is_not_integrated() {
        let scores = scores_with(80, &[(Dimension::Presence, 69)]);
        assert_ne!(ArchetypeClassifier::classify(&scores), Archetype::Integrated);
    }

    #[test]
    fn all_low_is_dormant_by_rule() {
        let classification = ArchetypeClassifier::classify_with_path(&scores_with(54, &[]));
        assert_eq!(classification.archetype, Archetype::Dormant);
        assert_eq!(classification.path, ClassificationPath::Rule(1));
    }

    #[test]
    fn overthinker_outranks_reactor() {
        // Matches both Overthinker and Reactor; Overthinker is earlier.
        let scores = scores_with(
            60,
            &[
                (Dimension::SelfAwareness, 80),
                (Dimension::GrowthOrientation, 80),
                (Dimension::EmotionalRegulation, 40),
            ],
        );
        assert_eq!(ArchetypeClassifier::classify(&scores), Archetype::Overthinker);
    }

    #[test]
    fn performer_outranks_grinder() {
        let scores = scores_with(
            60,
            &[
                (Dimension::Confidence, 70),
                (Dimension::Authenticity, 50),
                (Dimension::Discipline, 80),
                (Dimension::SelfAwareness, 50),
            ],
        );
        assert_eq!(ArchetypeClassifier::classify(&scores), Archetype::Performer);
    }

    #[test]
    fn grinder_accepts_resilience_alone() {
        let scores = scores_with(
            60,
            &[(Dimension::Resilience, 65), (Dimension::SelfAwareness, 54)],
        );
        assert_eq!(ArchetypeClassifier::classify(&scores), Archetype::Grinder);
    }

    #[test]
    fn drifter_requires_moderate_self_awareness() {
        let drifting = scores_with(
            60,
            &[
                (Dimension::Purpose, 50),
                (Dimension::Discipline, 50),
                (Dimension::SelfAwareness, 55),
            ],
        );
        assert_eq!(ArchetypeClassifier::classify(&drifting), Archetype::Drifter);

        let aware = scores_with(
            60,
            &[
                (Dimension::Purpose, 50),
                (Dimension::Discipline, 50),
                (Dimension::SelfAwareness, 70),
            ],
        );
        // Drifter rule misses; the fallback decides via weakest purpose.
        assert_eq!(
            ArchetypeClassifier::classify_with_path(&aware).path,
            ClassificationPath::Fallback(Dimension::Purpose)
        );
    }

    #[test]
    fn phoenix_when_growth_and_resilience_high() {
        let scores = scores_with(
            60,
            &[
                (Dimension::GrowthOrientation, 65),
                (Dimension::Resilience, 65),
            ],
        );
        let classification = ArchetypeClassifier::classify_with_path(&scores);
        assert_eq!(classification.archetype, Archetype::Phoenix);
        assert!(classification.via_rule());
    }

    #[test]
    fn fallback_uses_weakest_dimension() {
        // Nothing fires: no high signals, not all low.
        let scores = scores_with(60, &[(Dimension::Authenticity, 56)]);
        let classification = ArchetypeClassifier::classify_with_path(&scores);
        assert_eq!(classification.archetype, Archetype::Performer);
        assert_eq!(
            classification.path,
            ClassificationPath::Fallback(Dimension::Authenticity)
        );
    }

    #[test]
    fn fallback_tie_break_follows_table_order() {
        // Purpose and emotionalRegulation tie at the minimum; ER is listed first.
        let scores = scores_with(
            60,
            &[
                (Dimension::Purpose, 56),
                (Dimension::EmotionalRegulation, 56),
            ],
        );
        assert_eq!(ArchetypeClassifier::classify(&scores), Archetype::Reactor);
    }

    #[test]
    fn uniform_mid_scores_fall_back_to_reactor() {
        let classification = ArchetypeClassifier::classify_with_path(&scores_with(60, &[]));
        assert_eq!(classification.archetype, Archetype::Reactor);
        assert!(!classification.via_rule());
    }

    #[test]
    fn ids_round_trip() {
        for archetype in Archetype::ALL {
            assert_eq!(Archetype::from_id(archetype.id()), Some(archetype));
        }
        assert_eq!(Archetype::from_id("wanderer"), None);
    }

    #[test]
    fn serializes_as_id() {
        assert_eq!(
            serde_json::to_string(&Archetype::Overthinker).unwrap(),
            "\"overthinker\""
        );
    }
}
