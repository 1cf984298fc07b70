//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::auth::JwtConfig;

/// Shortest accepted HS256 secret.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// How bearer tokens are validated.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// HS256 tokens from the identity service.
    #[default]
    Jwt,
    /// Fixed development token; rejected in production.
    Mock,
}

/// Authentication configuration
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub mode: AuthMode,

    /// Shared HS256 secret
    #[serde(default)]
    pub jwt_secret: String,

    /// Expected `iss` claim
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub jwt_audience: String,

    /// Token accepted in mock mode
    #[serde(default = "default_dev_token")]
    pub dev_token: String,

    /// User id the dev token resolves to
    #[serde(default = "default_dev_user")]
    pub dev_user_id: String,
}

impl AuthConfig {
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig::new(&self.jwt_secret, &self.jwt_issuer, &self.jwt_audience)
    }

    /// Validate authentication configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        match self.mode {
            AuthMode::Mock if *environment == Environment::Production => {
                Err(ValidationError::MockAuthInProduction)
            }
            AuthMode::Mock => {
                if self.dev_token.is_empty() {
                    return Err(ValidationError::MissingRequired("AUTH__DEV_TOKEN"));
                }
                Ok(())
            }
            AuthMode::Jwt => {
                if self.jwt_secret.is_empty() {
                    return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
                }
                if self.jwt_secret.len() < MIN_JWT_SECRET_BYTES {
                    return Err(ValidationError::JwtSecretTooShort(MIN_JWT_SECRET_BYTES));
                }
                if self.jwt_issuer.is_empty() {
                    return Err(ValidationError::MissingRequired("AUTH__JWT_ISSUER"));
                }
                if self.jwt_audience.is_empty() {
                    return Err(ValidationError::MissingRequired("AUTH__JWT_AUDIENCE"));
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("mode", &self.mode)
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .field("dev_user_id", &self.dev_user_id)
            .finish_non_exhaustive()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::default(),
            jwt_secret: String::new(),
            jwt_issuer: default_issuer(),
            jwt_audience: default_audience(),
            dev_token: default_dev_token(),
            dev_user_id: default_dev_user(),
        }
    }
}

fn default_issuer() -> String {
    "lucid-identity".to_string()
}

fn default_audience() -> String {
    "lucid-api".to_string()
}

fn default_dev_token() -> String {
    "dev-token".to_string()
}

fn default_dev_user() -> String {
    "dev-user".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.mode, AuthMode::Jwt);
        assert_eq!(config.jwt_issuer, "lucid-identity");
        assert_eq!(config.jwt_audience, "lucid-api");
    }

    #[test]
    fn test_jwt_mode_requires_secret() {
        assert!(matches!(
            AuthConfig::default().validate(&Environment::Development),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_short_secret_rejected() {
        assert!(matches!(
            jwt_config("short").validate(&Environment::Development),
            Err(ValidationError::JwtSecretTooShort(32))
        ));
    }

    #[test]
    fn test_valid_jwt_config() {
        let config = jwt_config("0123456789abcdef0123456789abcdef");
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_mock_mode_only_outside_production() {
        let config = AuthConfig {
            mode: AuthMode::Mock,
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::MockAuthInProduction)
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = jwt_config("super-secret-value-that-must-not-leak");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
