//! Question bank value objects.
//!
//! A bank is immutable after construction. The standard bank is built once
//! and shared; custom banks are parsed from YAML and validated before use.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::{AssessmentError, Dimension, InvalidInput};

/// Smallest weight an option may contribute to a dimension.
pub const MIN_OPTION_WEIGHT: u8 = 1;

/// Largest weight an option may contribute to a dimension.
pub const MAX_OPTION_WEIGHT: u8 = 5;

/// Minimum number of options per question.
pub const MIN_OPTIONS_PER_QUESTION: usize = 2;

/// One selectable answer and the dimensions it signals.
///
/// Weights are sparse: dimensions the option says nothing about are absent,
/// which is different from a low weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerOption {
    pub text: String,
    pub weights: BTreeMap<Dimension, u8>,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, weights: &[(Dimension, u8)]) -> Self {
        Self {
            text: text.into(),
            weights: weights.iter().copied().collect(),
        }
    }

    /// Weight for a dimension, if the option signals it.
    pub fn weight(&self, dimension: Dimension) -> Option<u8> {
        self.weights.get(&dimension).copied()
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }
}

/// Ordered, validated collection of questions.
///
/// Deserializing goes through `QuestionBank::new`, so a bank read from any
/// serde format has passed `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBank")]
pub struct QuestionBank {
    questions: Vec<Question>,
}

/// Wire shape of a bank before validation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct UncheckedBank {
    questions: Vec<Question>,
}

impl TryFrom<UncheckedBank> for QuestionBank {
    type Error = AssessmentError;

    fn try_from(unchecked: UncheckedBank) -> Result<Self, Self::Error> {
        QuestionBank::new(unchecked.questions)
    }
}

impl QuestionBank {
    /// Builds a bank and validates it.
    pub fn new(questions: Vec<Question>) -> Result<Self, AssessmentError> {
        let bank = Self { questions };
        bank.validate()?;
        Ok(bank)
    }

    /// Builds a bank from compiled-in data. Callers validate at startup.
    pub(crate) fn from_static(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parses a YAML document of the form `questions: [...]` and validates it.
    ///
    /// Unknown dimension identifiers and unknown fields are rejected.
    pub fn from_yaml(source: &str) -> Result<Self, AssessmentError> {
        let unchecked: UncheckedBank = serde_yaml::from_str(source)
            .map_err(|e| AssessmentError::configuration(format!("question bank parse: {}", e)))?;
        Self::try_from(unchecked)
    }

    /// Checks every structural invariant of the bank.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        if self.questions.is_empty() {
            return Err(AssessmentError::configuration("question bank is empty"));
        }

        let mut seen = HashSet::new();
        for (qi, question) in self.questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(AssessmentError::configuration(format!(
                    "question {} has an empty id",
                    qi
                )));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(AssessmentError::configuration(format!(
                    "duplicate question id '{}'",
                    question.id
                )));
            }
            if question.prompt.trim().is_empty() {
                return Err(AssessmentError::configuration(format!(
                    "question '{}' has an empty prompt",
                    question.id
                )));
            }
            if question.options.len() < MIN_OPTIONS_PER_QUESTION {
                return Err(AssessmentError::configuration(format!(
                    "question '{}' has {} options, need at least {}",
                    question.id,
                    question.options.len(),
                    MIN_OPTIONS_PER_QUESTION
                )));
            }
            for (oi, option) in question.options.iter().enumerate() {
                if option.text.trim().is_empty() {
                    return Err(AssessmentError::configuration(format!(
                        "question '{}' option {} has empty text",
                        question.id, oi
                    )));
                }
                for (dimension, weight) in &option.weights {
                    if !(MIN_OPTION_WEIGHT..=MAX_OPTION_WEIGHT).contains(weight) {
                        return Err(AssessmentError::configuration(format!(
                            "question '{}' option {} weight {} for {} outside {}..={}",
                            question.id,
                            oi,
                            weight,
                            dimension,
                            MIN_OPTION_WEIGHT,
                            MAX_OPTION_WEIGHT
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Checks an answer sequence against this bank without scoring it.
    ///
    /// Reports the first offending question.
    pub fn check_answers(&self, answers: &[usize]) -> Result<(), InvalidInput> {
        if answers.len() != self.questions.len() {
            return Err(InvalidInput::AnswerCountMismatch {
                expected: self.questions.len(),
                actual: answers.len(),
            });
        }

        for (question_index, (question, &option_index)) in
            self.questions.iter().zip(answers).enumerate()
        {
            if option_index >= question.options.len() {
                return Err(InvalidInput::OptionOutOfRange {
                    question_index,
                    option_index,
                    option_count: question.options.len(),
                });
            }
        }

        Ok(())
    }

    /// Dimensions that at least one option weights.
    pub fn referenced_dimensions(&self) -> BTreeSet<Dimension> {
        self.questions
            .iter()
            .flat_map(|q| q.options.iter())
            .flat_map(|o| o.weights.keys().copied())
            .collect()
    }

    /// Dimensions no option weights. These always score the midpoint.
    pub fn unreferenced_dimensions(&self) -> Vec<Dimension> {
        let referenced = self.referenced_dimensions();
        Dimension::ALL
            .into_iter()
            .filter(|d| !referenced.contains(d))
            .collect()
    }
}

/// One option index per question, in bank order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSequence(Vec<usize>);

impl AnswerSequence {
    pub fn new(answers: Vec<usize>) -> Self {
        Self(answers)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for AnswerSequence {
    fn from(answers: Vec<usize>) -> Self {
        Self(answers)
    }
}

impl AsRef<[usize]> for AnswerSequence {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_option_question(id: &str) -> Question {
        Question::new(
            id,
            "Pick one",
            vec![
                AnswerOption::new("low", &[(Dimension::Resilience, 1)]),
                AnswerOption::new("high", &[(Dimension::Resilience, 5)]),
            ],
        )
    }

    #[test]
    fn new_accepts_valid_bank() {
        let bank = QuestionBank::new(vec![two_option_question("a"), two_option_question("b")]);
        assert_eq!(bank.unwrap().len(), 2);
    }

    #[test]
    fn rejects_empty_bank() {
        let err = QuestionBank::new(vec![]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err =
            QuestionBank::new(vec![two_option_question("a"), two_option_question("a")]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_single_option_question() {
        let q = Question::new("a", "?", vec![AnswerOption::new("only", &[])]);
        assert!(QuestionBank::new(vec![q]).is_err());
    }

    #[test]
    fn rejects_weight_out_of_range() {
        let q = Question::new(
            "a",
            "?",
            vec![
                AnswerOption::new("zero", &[(Dimension::Purpose, 0)]),
                AnswerOption::new("ok", &[(Dimension::Purpose, 3)]),
            ],
        );
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(err.to_string().contains("outside 1..=5"));
    }

    #[test]
    fn option_with_no_weights_is_legal() {
        let q = Question::new(
            "a",
            "?",
            vec![AnswerOption::new("silent", &[]), AnswerOption::new("also", &[])],
        );
        let bank = QuestionBank::new(vec![q]).unwrap();
        assert_eq!(bank.unreferenced_dimensions().len(), Dimension::COUNT);
    }

    #[test]
    fn check_answers_reports_count_mismatch() {
        let bank = QuestionBank::new(vec![two_option_question("a")]).unwrap();
        assert_eq!(
            bank.check_answers(&[0, 1]),
            Err(InvalidInput::AnswerCountMismatch {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn check_answers_reports_first_bad_option() {
        let bank =
            QuestionBank::new(vec![two_option_question("a"), two_option_question("b")]).unwrap();
        assert_eq!(
            bank.check_answers(&[1, 7]),
            Err(InvalidInput::OptionOutOfRange {
                question_index: 1,
                option_index: 7,
                option_count: 2
            })
        );
    }

    #[test]
    fn from_yaml_parses_sparse_weights() {
        let yaml = r#"
questions:
  - id: q1
    prompt: "How do you start your day?"
    options:
      - text: "Slowly"
        weights: { presence: 4 }
      - text: "With a plan"
        weights: { discipline: 5, purpose: 3 }
"#;
        let bank = QuestionBank::from_yaml(yaml).unwrap();
        let option = &bank.questions()[0].options[1];
        assert_eq!(option.weight(Dimension::Discipline), Some(5));
        assert_eq!(option.weight(Dimension::Presence), None);
        assert_eq!(
            bank.referenced_dimensions().into_iter().collect::<Vec<_>>(),
            vec![Dimension::Discipline, Dimension::Purpose, Dimension::Presence]
        );
    }

    #[test]
    fn json_deserialization_validates() {
        let empty = serde_json::from_str::<QuestionBank>(r#"{"questions": []}"#);
        assert!(empty.unwrap_err().to_string().contains("empty"));

        let duplicate = serde_json::json!({
            "questions": [two_option_question("a"), two_option_question("a")]
        });
        assert!(serde_json::from_value::<QuestionBank>(duplicate).is_err());

        let valid = serde_json::json!({
            "questions": [two_option_question("a"), two_option_question("b")]
        });
        assert_eq!(serde_json::from_value::<QuestionBank>(valid).unwrap().len(), 2);
    }

    #[test]
    fn serialized_bank_reads_back() {
        let bank =
            QuestionBank::new(vec![two_option_question("a"), two_option_question("b")]).unwrap();
        let json = serde_json::to_string(&bank).unwrap();
        assert_eq!(serde_json::from_str::<QuestionBank>(&json).unwrap(), bank);
    }

    #[test]
    fn from_yaml_rejects_unknown_dimension() {
        let yaml = r#"
questions:
  - id: q1
    prompt: "?"
    options:
      - text: "a"
        weights: { courage: 4 }
      - text: "b"
        weights: { purpose: 3 }
"#;
        let err = QuestionBank::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, AssessmentError::ConfigurationInvariantViolation { .. }));
    }
}
