//! Runtime switches

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Wrap the router in a per-request `TraceLayer`
    pub enable_tracing: bool,

    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_tracing: true,
            json_logs: false,
        }
    }
}
