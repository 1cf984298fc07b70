//! Assessment engine configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::{ConfigError, ValidationError};
use crate::application::handlers::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};
use crate::domain::assessment::{
    standard_question_bank, NormalizationFormula, QuestionBank, ScoringConfig,
};
use crate::domain::membership::MembershipTier;

/// Assessment engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Score normalization formula (`compressed` or `linear`)
    #[serde(default)]
    pub formula: NormalizationFormula,

    /// YAML question bank replacing the built-in one
    #[serde(default)]
    pub question_bank_path: Option<PathBuf>,

    /// Tier for users the membership store does not know
    #[serde(default)]
    pub default_tier: MembershipTier,

    /// History page size when the client does not ask for one
    #[serde(default = "default_history_limit")]
    pub history_page_size: u32,
}

impl AssessmentConfig {
    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig::new(self.formula)
    }

    /// The configured bank, or the built-in one.
    ///
    /// # Errors
    ///
    /// - `QuestionBankUnreadable` if the file cannot be read
    /// - `QuestionBankInvalid` if it does not parse or validate
    pub fn load_question_bank(&self) -> Result<Arc<QuestionBank>, ConfigError> {
        let Some(path) = &self.question_bank_path else {
            return Ok(standard_question_bank());
        };

        let source =
            std::fs::read_to_string(path).map_err(|source| ConfigError::QuestionBankUnreadable {
                path: path.clone(),
                source,
            })?;
        let bank = QuestionBank::from_yaml(&source)?;
        Ok(Arc::new(bank))
    }

    /// Validate assessment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.question_bank_path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::EmptyQuestionBankPath);
            }
        }
        if self.history_page_size == 0 || self.history_page_size > MAX_HISTORY_LIMIT {
            return Err(ValidationError::InvalidHistoryLimit(MAX_HISTORY_LIMIT));
        }
        Ok(())
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            formula: NormalizationFormula::default(),
            question_bank_path: None,
            default_tier: MembershipTier::default(),
            history_page_size: default_history_limit(),
        }
    }
}

fn default_history_limit() -> u32 {
    DEFAULT_HISTORY_LIMIT
}
