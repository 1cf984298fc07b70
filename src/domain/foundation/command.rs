//! Request context handed to command handlers.

use serde::Serialize;
use uuid::Uuid;

use super::{Timestamp, UserId};

/// Header the HTTP layer reads a caller-supplied correlation id from.
pub const CORRELATION_HEADER: &str = "x-request-id";

const MAX_CORRELATION_ID_LEN: usize = 128;

/// Who issued a command, when, and under which correlation id.
///
/// The correlation id is fixed at construction so every log line for one
/// submission carries the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandMetadata {
    pub user_id: UserId,
    pub correlation_id: String,
    pub issued_at: Timestamp,
    pub source: &'static str,
}

impl CommandMetadata {
    /// Metadata for an API request, with a fresh correlation id.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: Uuid::new_v4().to_string(),
            issued_at: Timestamp::now(),
            source: "api",
        }
    }

    /// Adopts a caller-supplied correlation id.
    ///
    /// Blank or oversized values are ignored and the generated id is kept.
    pub fn with_correlation_id(mut self, id: Option<&str>) -> Self {
        if let Some(id) = id.map(str::trim) {
            if !id.is_empty() && id.len() <= MAX_CORRELATION_ID_LEN {
                self.correlation_id = id.to_string();
            }
        }
        self
    }

    pub fn with_source(mut self, source: &'static str) -> Self {
        self.source = source;
        self
    }

    pub fn issued_at(mut self, at: Timestamp) -> Self {
        self.issued_at = at;
        self
    }
}

#[cfg(test)]
impl CommandMetadata {
    pub fn test_fixture() -> Self {
        Self::new(UserId::new("test-user-123").unwrap())
            .with_correlation_id(Some("test-correlation-id"))
            .with_source("test")
    }
}
