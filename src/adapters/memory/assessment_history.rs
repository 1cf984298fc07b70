//! In-memory assessment history.
//!
//! Used when no database is configured, and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::StoredAssessment;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentHistoryRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentHistory {
    by_user: Arc<RwLock<HashMap<UserId, Vec<StoredAssessment>>>>,
}

impl InMemoryAssessmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across all users.
    pub async fn len(&self) -> usize {
        self.by_user.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Newest first; among equal timestamps, the later insert first.
fn newest_first(records: &[StoredAssessment]) -> Vec<StoredAssessment> {
    let mut sorted: Vec<StoredAssessment> = records.iter().rev().cloned().collect();
    sorted.sort_by(|a, b| b.taken_at.cmp(&a.taken_at));
    sorted
}

#[async_trait]
impl AssessmentHistoryRepository for InMemoryAssessmentHistory {
    async fn save(&self, assessment: &StoredAssessment) -> Result<(), DomainError> {
        self.by_user
            .write()
            .await
            .entry(assessment.user_id.clone())
            .or_default()
            .push(assessment.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<StoredAssessment>, DomainError> {
        let by_user = self.by_user.read().await;
        let mut records = by_user
            .get(user_id)
            .map(|records| newest_first(records))
            .unwrap_or_default();
        records.truncate(limit as usize);
        Ok(records)
    }

    async fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StoredAssessment>, DomainError> {
        Ok(self.list_for_user(user_id, 1).await?.into_iter().next())
    }

    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        Ok(self
            .by_user
            .read()
            .await
            .get(user_id)
            .map(|records| records.len() as u64)
            .unwrap_or(0))
    }
}
