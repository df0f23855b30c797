//! Session store configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Limits for the in-memory session store
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionsConfig {
    /// Maximum number of live sessions; creation is refused beyond this
    pub max_sessions: usize,

    /// Seconds without an accepted event after which a session is dropped
    pub idle_timeout_secs: u64,
}

impl SessionsConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_sessions == 0 {
            return Err(ValidationError::InvalidSessionLimit);
        }
        if self.idle_timeout_secs == 0 {
            return Err(ValidationError::InvalidIdleTimeout);
        }
        Ok(())
    }
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            max_sessions: 10_000,
            idle_timeout_secs: 30 * 60,
        }
    }
}
