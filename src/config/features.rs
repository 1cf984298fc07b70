//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Serve `/api/assessment/companion-context`
    #[serde(default = "enabled")]
    pub companion_context: bool,

    /// Enable request tracing
    #[serde(default = "enabled")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            companion_context: true,
            enable_tracing: true,
        }
    }
}

fn enabled() -> bool {
    true
}
