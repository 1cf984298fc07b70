//! Fixed token table standing in for the identity service.
//!
//! Used by the test suites and by `LUCID__AUTH__MODE=mock`, where a single
//! configured token logs in as a configured user id.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Any token not registered is `InvalidToken`.
#[derive(Debug, Clone, Default)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    outage: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Registers `token` for a user known only by id. An invalid id leaves
    /// the token unregistered.
    pub fn with_token(self, token: impl Into<String>, user_id: &str) -> Self {
        match UserId::new(user_id) {
            Ok(id) => self.with_user(token, AuthenticatedUser::anonymous(id)),
            Err(err) => {
                tracing::warn!(error = %err, "mock token not registered");
                self
            }
        }
    }

    /// Every validation fails with `error`, registered tokens included.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.outage = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.outage {
            return Err(error.clone());
        }
        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}
