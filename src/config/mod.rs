//! Service configuration.
//!
//! Everything comes from `LUCID__`-prefixed environment variables, with `__`
//! between nesting levels (`LUCID__SERVER__PORT` is `server.port`). A `.env`
//! file is read first when present. Every section has defaults except the
//! JWT secret, which `validate` insists on in `jwt` auth mode.

mod assessment;
mod auth;
mod database;
mod error;
mod features;
mod server;

pub use assessment::AssessmentConfig;
pub use auth::{AuthConfig, AuthMode, MIN_JWT_SECRET_BYTES};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use std::collections::HashMap;

use serde::Deserialize;

const ENV_PREFIX: &str = "LUCID";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Absent means in-memory history.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub assessment: AssessmentConfig,

    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        // Runs before tracing is installed; a missing file is normal.
        dotenvy::dotenv().ok();
        Self::from_env_source(None)
    }

    /// Builds from explicit `LUCID__...` variables instead of the process
    /// environment.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::from_env_source(Some(vars))
    }

    fn from_env_source(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .source(vars);

        Ok(config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?)
    }

    /// Checks each section. Database settings are checked only when present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database
            .as_ref()
            .map_or(Ok(()), DatabaseConfig::validate)?;
        self.auth.validate(&self.server.environment)?;
        self.assessment.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
