//! SubmitAssessmentHandler - Command handler for completing an assessment.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::assessment::{
    AnswerSequence, AssessmentEngine, ScoringVersion, StoredAssessment,
};
use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::gamification::{
    score_improvement_xp, unlocked_by, Achievement, UserStats, XpAction,
};
use crate::ports::AssessmentHistoryRepository;

/// Command to score and record a completed answer sequence.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub answers: AnswerSequence,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub assessment: StoredAssessment,
    /// Overall score of the user's previous assessment, when this is a
    /// retake scored with the same formula. Scores from different formulas
    /// are never compared.
    pub previous_overall: Option<u8>,
    pub xp_awarded: u32,
    /// Achievements this submission crossed the threshold for.
    pub achievements_unlocked: Vec<&'static Achievement>,
}

/// What a user's prior history says, restricted to results scored the
/// same way as the new one.
#[derive(Debug, Default)]
struct PriorResults {
    taken: u64,
    /// Most recent comparable overall
    latest: Option<u8>,
    /// Oldest comparable overall, the growth baseline
    first: Option<u8>,
    best: Option<u8>,
}

impl PriorResults {
    /// `history` is newest first.
    fn from_history(history: &[StoredAssessment], version: ScoringVersion) -> Self {
        let comparable: Vec<u8> = history
            .iter()
            .filter(|stored| stored.result.scoring_version == version)
            .map(StoredAssessment::overall)
            .collect();
        Self {
            taken: history.len() as u64,
            latest: comparable.first().copied(),
            first: comparable.last().copied(),
            best: comparable.iter().copied().max(),
        }
    }

    fn stats(&self) -> UserStats {
        assessment_stats(self.taken, self.latest, self.best, self.first)
    }

    fn stats_with(&self, overall: u8) -> UserStats {
        let best = self.best.map_or(overall, |best| best.max(overall));
        assessment_stats(
            self.taken + 1,
            Some(overall),
            Some(best),
            self.first.or(Some(overall)),
        )
    }
}

fn assessment_stats(
    taken: u64,
    latest: Option<u8>,
    best: Option<u8>,
    first: Option<u8>,
) -> UserStats {
    UserStats {
        assessments_taken: u32::try_from(taken).unwrap_or(u32::MAX),
        lucid_score: latest.unwrap_or(0),
        lucid_score_improvement: match (best, first) {
            (Some(best), Some(first)) => best.saturating_sub(first),
            _ => 0,
        },
        ..Default::default()
    }
}

/// Handler for submitting assessments.
pub struct SubmitAssessmentHandler {
    engine: AssessmentEngine,
    history: Arc<dyn AssessmentHistoryRepository>,
}

impl SubmitAssessmentHandler {
    pub fn new(engine: AssessmentEngine, history: Arc<dyn AssessmentHistoryRepository>) -> Self {
        Self { engine, history }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitAssessmentResult, DomainError> {
        // 1. Score before touching storage so bad input persists nothing
        let result = self.engine.generate(cmd.answers.as_slice()).map_err(|e| {
            warn!(
                user_id = %metadata.user_id,
                correlation_id = %metadata.correlation_id,
                error = %e,
                "Rejected assessment answers"
            );
            DomainError::from(e)
        })?;

        // 2. Prior history, compared only within one scoring version
        let history = self
            .history
            .list_for_user(&metadata.user_id, u32::MAX)
            .await?;
        let prior = PriorResults::from_history(&history, result.scoring_version);
        let previous_overall = prior.latest;

        // 3. Persist
        let assessment = StoredAssessment::new(metadata.user_id.clone(), cmd.answers, result)
            .taken_at(metadata.issued_at);
        self.history.save(&assessment).await?;

        let xp_awarded = XpAction::CompleteAssessment.reward()
            + previous_overall
                .map(|previous| score_improvement_xp(previous, assessment.overall()))
                .unwrap_or(0);

        let achievements_unlocked =
            unlocked_by(&prior.stats(), &prior.stats_with(assessment.overall()));

        info!(
            user_id = %metadata.user_id,
            correlation_id = %metadata.correlation_id,
            assessment_id = %assessment.id,
            archetype = assessment.result.archetype.id(),
            overall = assessment.overall(),
            scoring_version = %assessment.result.scoring_version,
            xp_awarded,
            achievements = achievements_unlocked.len(),
            "Assessment recorded"
        );

        Ok(SubmitAssessmentResult {
            assessment,
            previous_overall,
            xp_awarded,
            achievements_unlocked,
        })
    }
}
