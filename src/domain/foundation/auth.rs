//! The caller behind a request.
//!
//! Lucid never sees credentials. A `SessionValidator` turns a bearer token
//! into an `AuthenticatedUser`, and handlers only ever see the user id.

use super::UserId;
use thiserror::Error;

/// Claims Lucid keeps from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: Option<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email,
            display_name,
        }
    }

    /// A user known only by id.
    pub fn anonymous(id: UserId) -> Self {
        Self::new(id, None, None)
    }
}

/// Why a token was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// The validator could not reach a verdict (keys unavailable and so on).
    #[error("Authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// The client must obtain a new token; retrying the same one is pointless.
    pub fn requires_reauthentication(&self) -> bool {
        !matches!(self, AuthError::ServiceUnavailable(_))
    }
}
