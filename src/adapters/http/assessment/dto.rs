//! HTTP DTOs (Data Transfer Objects) for assessment endpoints.
//!
//! Option weights never leave the server: the questions payload carries
//! prompts and option text only.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{CompanionContext, QuestionBank};
use crate::domain::gamification::{format_xp, Achievement};
use crate::domain::membership::{AssessmentResultView, MembershipTier};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to submit a completed assessment.
///
/// Indices are signed on the wire so a negative index is reported as an
/// out-of-range answer instead of a body parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub answers: Vec<i64>,
}

/// Query parameters for the history endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub limit: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionResponse {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub index: usize,
    pub prompt: String,
    pub options: Vec<OptionResponse>,
}

/// The question bank as the client renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub total: usize,
    pub questions: Vec<QuestionResponse>,
}

impl From<&QuestionBank> for QuestionsResponse {
    fn from(bank: &QuestionBank) -> Self {
        let questions = bank
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionResponse {
                id: question.id.clone(),
                index,
                prompt: question.prompt.clone(),
                options: question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| OptionResponse {
                        index,
                        text: option.text.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            total: bank.len(),
            questions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub xp_reward: u32,
}

impl From<&Achievement> for AchievementResponse {
    fn from(achievement: &Achievement) -> Self {
        Self {
            id: achievement.id,
            name: achievement.name,
            description: achievement.description,
            icon: achievement.icon,
            xp_reward: achievement.xp_reward,
        }
    }
}

/// Response for a recorded assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentResponse {
    pub result: AssessmentResultView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_overall: Option<u8>,
    pub xp_awarded: u32,
    pub xp_display: String,
    pub achievements_unlocked: Vec<AchievementResponse>,
}

impl SubmitAssessmentResponse {
    pub fn new(
        result: AssessmentResultView,
        previous_overall: Option<u8>,
        xp_awarded: u32,
        achievements: &[&Achievement],
    ) -> Self {
        Self {
            result,
            previous_overall,
            xp_awarded,
            xp_display: format_xp(xp_awarded),
            achievements_unlocked: achievements
                .iter()
                .map(|achievement| AchievementResponse::from(*achievement))
                .collect(),
        }
    }
}

/// Response for the history endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub tier: MembershipTier,
    pub entries: Vec<AssessmentResultView>,
    pub total_taken: u64,
    pub has_locked_entries: bool,
}

/// Companion context plus its rendered text block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionContextResponse {
    pub context: CompanionContext,
    pub rendered: String,
}

impl From<CompanionContext> for CompanionContextResponse {
    fn from(context: CompanionContext) -> Self {
        let rendered = context.render();
        Self { context, rendered }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::standard_question_bank;

    #[test]
    fn questions_response_hides_weights() {
        let response = QuestionsResponse::from(standard_question_bank().as_ref());
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(response.total, 10);
        assert!(response.questions.iter().all(|q| q.options.len() == 4));
        assert!(!json.contains("weights"));
        assert!(!json.contains("selfAwareness"));
    }

    #[test]
    fn submit_request_accepts_negative_indices() {
        let request: SubmitAssessmentRequest =
            serde_json::from_str(r#"{"answers":[0,-1,2]}"#).unwrap();
        assert_eq!(request.answers, vec![0, -1, 2]);
    }

    #[test]
    fn submit_response_formats_xp() {
        let json = serde_json::to_value(SubmitAssessmentResponse {
            result: sample_view(),
            previous_overall: None,
            xp_awarded: 12_345,
            xp_display: format_xp(12_345),
            achievements_unlocked: vec![],
        })
        .unwrap();
        assert_eq!(json["xpDisplay"], "12.3k");
        assert!(json.get("previousOverall").is_none());
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::not_found("nothing")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json.get("details").is_none());
    }

    fn sample_view() -> AssessmentResultView {
        use crate::domain::assessment::{
            generate_result, AnswerSequence, ScoringConfig, StoredAssessment,
        };
        use crate::domain::foundation::UserId;

        let answers = vec![0; 10];
        let result =
            generate_result(&standard_question_bank(), &answers, ScoringConfig::default()).unwrap();
        let stored = StoredAssessment::new(
            UserId::new("u1").unwrap(),
            AnswerSequence::new(answers),
            result,
        );
        AssessmentResultView::for_tier(&stored, MembershipTier::Free)
    }
}
