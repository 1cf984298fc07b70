//! Assessment Module - Mindset scoring engine.
//!
//! Turns a completed questionnaire into dimension scores, an archetype and
//! its narrative. Everything here is pure and synchronous; persistence and
//! transport live in ports and adapters.
//!
//! # Components
//!
//! - `QuestionBank` - Validated questions with sparse per-dimension weights
//! - `generate_result` - Scores, classifies and describes in one call
//! - `ArchetypeClassifier` - Rule table checks and `classify_with_path`
//!   for explaining a result
//! - `describe` - Narrative copy per archetype
//! - `AssessmentEngine` - Bank plus scoring config, producing `AssessmentResult`
//! - `AnswerSheet` - Incremental answer collection
//! - `CompanionContext` - Read-only summary for the conversational companion

mod answer_sheet;
mod archetype;
mod companion;
mod dimension;
mod errors;
mod narrative;
mod presentation;
mod question_bank;
mod result;
mod scoring;
mod standard_bank;
mod stored;

pub use answer_sheet::AnswerSheet;
pub use archetype::{
    Archetype, ArchetypeClassifier, ArchetypeRule, Classification, ClassificationPath,
    ARCHETYPE_RULES, DEFAULT_ARCHETYPE, FALLBACK_TABLE, HIGH_THRESHOLD, INTEGRATED_THRESHOLD,
    LOW_THRESHOLD,
};
pub use companion::{CompanionContext, DimensionSummary};
pub use dimension::Dimension;
pub use errors::{AssessmentError, InvalidInput};
pub use narrative::{describe, ArchetypeNarrative};
pub use presentation::ScoreLevel;
pub use question_bank::{
    AnswerOption, AnswerSequence, Question, QuestionBank, MAX_OPTION_WEIGHT, MIN_OPTION_WEIGHT,
    MIN_OPTIONS_PER_QUESTION,
};
pub use result::{generate_result, AssessmentEngine, AssessmentResult};
pub(crate) use scoring::Scorer;
pub use scoring::{
    DimensionScores, NormalizationFormula, ScoringConfig, ScoringVersion, NEUTRAL_MIDPOINT,
};
pub use standard_bank::standard_question_bank;
pub use stored::StoredAssessment;
