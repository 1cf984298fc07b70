//! Score banding for result cards.

use serde::{Deserialize, Serialize};

/// Qualitative band for a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Low,
    Medium,
    High,
    Excellent,
}

impl ScoreLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=44 => ScoreLevel::Low,
            45..=59 => ScoreLevel::Medium,
            60..=74 => ScoreLevel::High,
            _ => ScoreLevel::Excellent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreLevel::Low => "Low",
            ScoreLevel::Medium => "Medium",
            ScoreLevel::High => "High",
            ScoreLevel::Excellent => "Excellent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(ScoreLevel::from_score(44), ScoreLevel::Low);
        assert_eq!(ScoreLevel::from_score(45), ScoreLevel::Medium);
        assert_eq!(ScoreLevel::from_score(59), ScoreLevel::Medium);
        assert_eq!(ScoreLevel::from_score(60), ScoreLevel::High);
        assert_eq!(ScoreLevel::from_score(74), ScoreLevel::High);
        assert_eq!(ScoreLevel::from_score(75), ScoreLevel::Excellent);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(ScoreLevel::Low < ScoreLevel::Medium);
        assert!(ScoreLevel::High < ScoreLevel::Excellent);
    }
}
