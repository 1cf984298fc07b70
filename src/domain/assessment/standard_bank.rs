//! The standard ten-question Lucid assessment.

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::Dimension::*;
use super::{AnswerOption, Question, QuestionBank};

static STANDARD_QUESTION_BANK: Lazy<Arc<QuestionBank>> =
    Lazy::new(|| Arc::new(QuestionBank::from_static(standard_questions())));

/// Shared handle to the compiled-in question bank.
///
/// The bank is built once on first access. Startup calls
/// [`QuestionBank::validate`] on it before serving traffic.
pub fn standard_question_bank() -> Arc<QuestionBank> {
    Arc::clone(&STANDARD_QUESTION_BANK)
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question::new(
            "q1",
            "When something goes wrong, your first thought is usually...",
            vec![
                AnswerOption::new(
                    "This always happens to me",
                    &[(SelfAwareness, 2), (Resilience, 1), (InnerDialogue, 1)],
                ),
                AnswerOption::new(
                    "What can I learn from this?",
                    &[(SelfAwareness, 5), (GrowthOrientation, 5), (Resilience, 4)],
                ),
                AnswerOption::new(
                    "Who's to blame?",
                    &[(SelfAwareness, 1), (EmotionalRegulation, 2), (Authenticity, 2)],
                ),
                AnswerOption::new(
                    "How do I fix it?",
                    &[(Resilience, 5), (Discipline, 4), (GrowthOrientation, 3)],
                ),
            ],
        ),
        Question::new(
            "q2",
            "How often do you compare yourself to others?",
            vec![
                AnswerOption::new(
                    "Constantly, and it's exhausting",
                    &[(SelfAwareness, 2), (InnerDialogue, 1), (Confidence, 1)],
                ),
                AnswerOption::new(
                    "Sometimes, but I catch myself",
                    &[(SelfAwareness, 5), (InnerDialogue, 4), (EmotionalRegulation, 4)],
                ),
                AnswerOption::new(
                    "Rarely. I'm focused on my own path",
                    &[(Authenticity, 5), (Confidence, 5), (Purpose, 4)],
                ),
                AnswerOption::new(
                    "I make sure I always come out ahead",
                    &[(Confidence, 5), (Authenticity, 1), (SelfAwareness, 2)],
                ),
            ],
        ),
        Question::new(
            "q3",
            "When you set a goal, you typically...",
            vec![
                AnswerOption::new(
                    "Start strong, lose momentum",
                    &[(GrowthOrientation, 2), (Discipline, 1), (Purpose, 1)],
                ),
                AnswerOption::new(
                    "Overthink it and never start",
                    &[(SelfAwareness, 5), (EmotionalRegulation, 1), (Discipline, 1)],
                ),
                AnswerOption::new(
                    "Grind until it's done",
                    &[(Discipline, 5), (Resilience, 5), (SelfAwareness, 2)],
                ),
                AnswerOption::new(
                    "Adjust as I go",
                    &[
                        (GrowthOrientation, 5),
                        (EmotionalRegulation, 4),
                        (Purpose, 4),
                        (Discipline, 4),
                    ],
                ),
            ],
        ),
        Question::new(
            "q4",
            "Your inner voice is usually...",
            vec![
                AnswerOption::new(
                    "My biggest critic",
                    &[(InnerDialogue, 1), (EmotionalRegulation, 2), (SelfAwareness, 4)],
                ),
                AnswerOption::new(
                    "Background noise I ignore",
                    &[(InnerDialogue, 2), (SelfAwareness, 1), (Presence, 2)],
                ),
                AnswerOption::new(
                    "Supportive but realistic",
                    &[(InnerDialogue, 5), (SelfAwareness, 5), (Authenticity, 4)],
                ),
                AnswerOption::new(
                    "My best coach",
                    &[(InnerDialogue, 5), (Confidence, 5), (GrowthOrientation, 4)],
                ),
            ],
        ),
        Question::new(
            "q5",
            "When someone criticizes you...",
            vec![
                AnswerOption::new(
                    "I shut down",
                    &[(EmotionalRegulation, 1), (Resilience, 1), (Confidence, 1)],
                ),
                AnswerOption::new(
                    "I get defensive",
                    &[(EmotionalRegulation, 1), (Authenticity, 2), (GrowthOrientation, 2)],
                ),
                AnswerOption::new(
                    "I consider whether it's valid",
                    &[
                        (EmotionalRegulation, 5),
                        (SelfAwareness, 5),
                        (GrowthOrientation, 5),
                        (Authenticity, 4),
                    ],
                ),
                AnswerOption::new(
                    "I smile and use it as fuel",
                    &[(Resilience, 5), (GrowthOrientation, 5), (Confidence, 4), (Authenticity, 2)],
                ),
            ],
        ),
        Question::new(
            "q6",
            "When facing a new challenge, you feel mostly...",
            vec![
                AnswerOption::new(
                    "Anxious. What if I fail?",
                    &[(EmotionalRegulation, 2), (Confidence, 1), (Presence, 2)],
                ),
                AnswerOption::new(
                    "Curious. This could be interesting",
                    &[(GrowthOrientation, 5), (Presence, 4), (Resilience, 4)],
                ),
                AnswerOption::new(
                    "Confident. I've handled worse",
                    &[(Confidence, 5), (Resilience, 5), (Discipline, 4)],
                ),
                AnswerOption::new(
                    "Overwhelmed. Where do I even start?",
                    &[(EmotionalRegulation, 1), (Discipline, 1), (Purpose, 2)],
                ),
            ],
        ),
        Question::new(
            "q7",
            "How well do you understand why you react the way you do?",
            vec![
                AnswerOption::new(
                    "Very well. I know my triggers",
                    &[(SelfAwareness, 5), (EmotionalRegulation, 4), (Presence, 4)],
                ),
                AnswerOption::new(
                    "Sometimes it surprises me",
                    &[(SelfAwareness, 2), (EmotionalRegulation, 2), (Presence, 2)],
                ),
                AnswerOption::new(
                    "I react first, understand later",
                    &[(SelfAwareness, 1), (EmotionalRegulation, 1), (GrowthOrientation, 4)],
                ),
                AnswerOption::new(
                    "I don't really think about it",
                    &[(SelfAwareness, 1), (Presence, 1), (Purpose, 2)],
                ),
            ],
        ),
        Question::new(
            "q8",
            "After a hard day, you typically...",
            vec![
                AnswerOption::new(
                    "Spiral into negative thoughts",
                    &[(EmotionalRegulation, 1), (InnerDialogue, 1), (Presence, 1)],
                ),
                AnswerOption::new(
                    "Distract myself completely",
                    &[(Presence, 1), (Purpose, 2), (Discipline, 2)],
                ),
                AnswerOption::new(
                    "Process it and let it go",
                    &[(EmotionalRegulation, 5), (InnerDialogue, 5), (Presence, 5), (Resilience, 4)],
                ),
                AnswerOption::new(
                    "Push through. No time for feelings",
                    &[(Resilience, 5), (Discipline, 5), (SelfAwareness, 1)],
                ),
            ],
        ),
        Question::new(
            "q9",
            "When thinking about your future, you believe...",
            vec![
                AnswerOption::new(
                    "I'm limited by who I am",
                    &[(GrowthOrientation, 1), (Confidence, 1), (Purpose, 1)],
                ),
                AnswerOption::new(
                    "I could be more, but I'm not sure what for",
                    &[(SelfAwareness, 4), (Purpose, 1), (Discipline, 2)],
                ),
                AnswerOption::new(
                    "I'm actively becoming who I want to be",
                    &[(GrowthOrientation, 5), (Purpose, 5), (Authenticity, 5)],
                ),
                AnswerOption::new(
                    "I'll figure it out eventually",
                    &[(Purpose, 1), (Discipline, 1), (Presence, 2)],
                ),
            ],
        ),
        Question::new(
            "q10",
            "Right now, you would describe yourself as...",
            vec![
                AnswerOption::new(
                    "Stuck but wanting to change",
                    &[(SelfAwareness, 4), (GrowthOrientation, 2), (Purpose, 1), (Resilience, 2)],
                ),
                AnswerOption::new(
                    "Putting on a good face for everyone",
                    &[(Confidence, 4), (Authenticity, 1), (Presence, 2)],
                ),
                AnswerOption::new(
                    "Actively growing and grounded",
                    &[(Purpose, 5), (Presence, 5), (Authenticity, 5), (Discipline, 4)],
                ),
                AnswerOption::new(
                    "Going through the motions",
                    &[(Purpose, 1), (Presence, 1), (Authenticity, 2), (GrowthOrientation, 1)],
                ),
            ],
        ),
    ]
}
