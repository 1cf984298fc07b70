//! Mindset dimensions measured by the assessment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AssessmentError;

/// A named axis of the mindset construct.
///
/// Declaration order is the canonical order: it drives iteration,
/// serialization and every tie-break in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    SelfAwareness,
    EmotionalRegulation,
    Resilience,
    Discipline,
    GrowthOrientation,
    InnerDialogue,
    Confidence,
    Authenticity,
    Purpose,
    Presence,
}

impl Dimension {
    /// Number of dimensions in the construct.
    pub const COUNT: usize = 10;

    /// Every dimension in canonical order.
    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::SelfAwareness,
        Dimension::EmotionalRegulation,
        Dimension::Resilience,
        Dimension::Discipline,
        Dimension::GrowthOrientation,
        Dimension::InnerDialogue,
        Dimension::Confidence,
        Dimension::Authenticity,
        Dimension::Purpose,
        Dimension::Presence,
    ];

    /// Position of this dimension in [`Dimension::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Wire identifier (camelCase).
    pub fn id(&self) -> &'static str {
        match self {
            Dimension::SelfAwareness => "selfAwareness",
            Dimension::EmotionalRegulation => "emotionalRegulation",
            Dimension::Resilience => "resilience",
            Dimension::Discipline => "discipline",
            Dimension::GrowthOrientation => "growthOrientation",
            Dimension::InnerDialogue => "innerDialogue",
            Dimension::Confidence => "confidence",
            Dimension::Authenticity => "authenticity",
            Dimension::Purpose => "purpose",
            Dimension::Presence => "presence",
        }
    }

    /// Human-readable name derived from the identifier.
    ///
    /// `selfAwareness` becomes `Self Awareness`.
    pub fn display_name(&self) -> String {
        let mut name = String::with_capacity(self.id().len() + 2);
        for (i, ch) in self.id().chars().enumerate() {
            if i == 0 {
                name.extend(ch.to_uppercase());
            } else if ch.is_uppercase() {
                name.push(' ');
                name.push(ch);
            } else {
                name.push(ch);
            }
        }
        name
    }

    /// Icon shown next to the dimension in result cards.
    pub fn emoji(&self) -> &'static str {
        match self {
            Dimension::SelfAwareness => "🧠",
            Dimension::EmotionalRegulation => "🧘",
            Dimension::Resilience => "💪",
            Dimension::Discipline => "🎯",
            Dimension::GrowthOrientation => "📈",
            Dimension::InnerDialogue => "💬",
            Dimension::Confidence => "🦁",
            Dimension::Authenticity => "🪞",
            Dimension::Purpose => "🧭",
            Dimension::Presence => "🌿",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Dimension {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.id() == s)
            .ok_or_else(|| AssessmentError::configuration(format!("unknown dimension '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, dimension) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), i);
        }
    }

    #[test]
    fn display_name_splits_camel_case() {
        assert_eq!(Dimension::SelfAwareness.display_name(), "Self Awareness");
        assert_eq!(Dimension::GrowthOrientation.display_name(), "Growth Orientation");
        assert_eq!(Dimension::Purpose.display_name(), "Purpose");
    }

    #[test]
    fn every_dimension_has_an_emoji() {
        assert!(Dimension::ALL.iter().all(|d| !d.emoji().is_empty()));
    }

    #[test]
    fn parses_from_wire_identifier() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.id().parse::<Dimension>().unwrap(), dimension);
        }
    }

    #[test]
    fn unknown_identifier_is_a_configuration_error() {
        let err = "courage".parse::<Dimension>().unwrap_err();
        assert!(matches!(err, AssessmentError::ConfigurationInvariantViolation { .. }));
    }

    #[test]
    fn serializes_as_camel_case() {
        let json = serde_json::to_string(&Dimension::InnerDialogue).unwrap();
        assert_eq!(json, "\"innerDialogue\"");
    }
}
