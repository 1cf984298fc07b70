//! Bearer token validation.
//!
//! Lucid does not issue tokens. The identity service signs them and this port
//! turns one into an `AuthenticatedUser`. Implementations must check
//! signature, issuer, audience and expiry.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens.
///
/// - malformed token or bad signature: `AuthError::InvalidToken`
/// - past its expiry: `AuthError::TokenExpired`
/// - validator cannot decide (key fetch failed, etc.): `AuthError::ServiceUnavailable`
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw credential, without the `Bearer ` scheme.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

/// Extracts the credential from an `Authorization` header value.
///
/// The scheme is matched case-insensitively. Returns `None` for other
/// schemes or an empty credential.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, credential) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let credential = credential.trim();
    (!credential.is_empty()).then_some(credential)
}
