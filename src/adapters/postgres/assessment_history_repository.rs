//! PostgreSQL implementation of AssessmentHistoryRepository.
//!
//! Scores and answers are stored as JSONB; archetype, overall and scoring
//! version get their own columns for reporting queries. `seq` records
//! insertion order and breaks `taken_at` ties.

use crate::domain::assessment::{
    AnswerSequence, Archetype, AssessmentResult, DimensionScores, ScoringVersion,
    StoredAssessment,
};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::AssessmentHistoryRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the AssessmentHistoryRepository port.
#[derive(Clone)]
pub struct PostgresAssessmentHistoryRepository {
    pool: PgPool,
}

impl PostgresAssessmentHistoryRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a stored assessment.
#[derive(Debug, sqlx::FromRow)]
struct AssessmentRow {
    id: Uuid,
    user_id: String,
    answers: Json<Vec<usize>>,
    scores: Json<DimensionScores>,
    archetype: String,
    archetype_description: String,
    insight: String,
    scoring_version: String,
    taken_at: DateTime<Utc>,
}

impl TryFrom<AssessmentRow> for StoredAssessment {
    type Error = DomainError;

    fn try_from(row: AssessmentRow) -> Result<Self, Self::Error> {
        let archetype = Archetype::from_id(&row.archetype).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid archetype value: {}", row.archetype),
            )
        })?;
        let scoring_version: ScoringVersion = row.scoring_version.parse().map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid scoring version: {}", row.scoring_version),
            )
        })?;
        let user_id = UserId::new(row.user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?;

        Ok(StoredAssessment {
            id: AssessmentId::from_uuid(row.id),
            user_id,
            answers: AnswerSequence::new(row.answers.0),
            result: AssessmentResult {
                scores: row.scores.0,
                archetype,
                archetype_description: row.archetype_description,
                insight: row.insight,
                scoring_version,
            },
            taken_at: Timestamp::from_datetime(row.taken_at),
        })
    }
}

const NEWEST_FIRST: &str = "ORDER BY taken_at DESC, seq DESC";

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, answers, scores, archetype, archetype_description,
           insight, scoring_version, taken_at
    FROM assessment_results
"#;

#[async_trait]
impl AssessmentHistoryRepository for PostgresAssessmentHistoryRepository {
    async fn save(&self, assessment: &StoredAssessment) -> Result<(), DomainError> {
        let result = &assessment.result;

        sqlx::query(
            r#"
            INSERT INTO assessment_results (
                id, user_id, answers, scores, overall, archetype,
                archetype_description, insight, scoring_version, taken_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(assessment.id.as_uuid())
        .bind(assessment.user_id.as_str())
        .bind(Json(assessment.answers.as_slice()))
        .bind(Json(&result.scores))
        .bind(i16::from(result.overall()))
        .bind(result.archetype.id())
        .bind(&result.archetype_description)
        .bind(&result.insight)
        .bind(result.scoring_version.as_str())
        .bind(assessment.taken_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert assessment: {}", e)))?;

        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<StoredAssessment>, DomainError> {
        let query = format!("{} WHERE user_id = $1 {} LIMIT $2", SELECT_COLUMNS, NEWEST_FIRST);
        let rows: Vec<AssessmentRow> = sqlx::query_as(&query)
            .bind(user_id.as_str())
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list assessments: {}", e)))?;

        rows.into_iter().map(StoredAssessment::try_from).collect()
    }

    async fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StoredAssessment>, DomainError> {
        Ok(self.list_for_user(user_id, 1).await?.into_iter().next())
    }

    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM assessment_results WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to count assessments: {}", e))
                })?;

        Ok(count.max(0) as u64)
    }
}
