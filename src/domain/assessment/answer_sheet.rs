//! Answers collected one question at a time.

use super::{AnswerSequence, InvalidInput, QuestionBank};

/// Partially completed answer set for a bank.
///
/// Indices are validated as they are recorded, so a completed sheet always
/// scores without input errors against the bank it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    option_counts: Vec<usize>,
    answers: Vec<Option<usize>>,
}

impl AnswerSheet {
    pub fn new(bank: &QuestionBank) -> Self {
        let option_counts: Vec<usize> = bank.questions().iter().map(|q| q.options.len()).collect();
        let answers = vec![None; option_counts.len()];
        Self {
            option_counts,
            answers,
        }
    }

    /// Records or replaces the answer for one question.
    pub fn record(&mut self, question_index: usize, option_index: usize) -> Result<(), InvalidInput> {
        let option_count = *self.option_counts.get(question_index).ok_or(
            InvalidInput::QuestionOutOfRange {
                question_index,
                question_count: self.option_counts.len(),
            },
        )?;

        if option_index >= option_count {
            return Err(InvalidInput::OptionOutOfRange {
                question_index,
                option_index,
                option_count,
            });
        }

        self.answers[question_index] = Some(option_index);
        Ok(())
    }

    pub fn answer(&self, question_index: usize) -> Option<usize> {
        self.answers.get(question_index).copied().flatten()
    }

    /// Returns (answered, total).
    pub fn progress(&self) -> (usize, usize) {
        let answered = self.answers.iter().filter(|a| a.is_some()).count();
        (answered, self.answers.len())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// First question still waiting for an answer.
    pub fn next_unanswered(&self) -> Option<usize> {
        self.answers.iter().position(Option::is_none)
    }

    /// Converts to an answer sequence once every question is answered.
    pub fn complete(&self) -> Result<AnswerSequence, InvalidInput> {
        let answers = self
            .answers
            .iter()
            .enumerate()
            .map(|(question_index, answer)| answer.ok_or(InvalidInput::Unanswered { question_index }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AnswerSequence::new(answers))
    }
}
