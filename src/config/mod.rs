//! Runtime configuration.
//!
//! Everything comes from `STRATEGY_WIZARD__<SECTION>__<KEY>` environment
//! variables, optionally seeded from a `.env` file. Every key has a default,
//! so an empty environment yields a runnable development setup.
//!
//! ```no_run
//! use strategy_wizard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! config.validate().expect("valid configuration");
//! println!("listening on {}", config.server.socket_addr());
//! ```

mod contact;
mod error;
mod features;
mod server;
mod sessions;

pub use contact::ContactConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig, REQUEST_TIMEOUT_RANGE};
pub use sessions::SessionsConfig;

use serde::Deserialize;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "STRATEGY_WIZARD";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sessions: SessionsConfig,
    pub contact: ContactConfig,
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads `.env` when present, then the process environment.
    ///
    /// `STRATEGY_WIZARD__SESSIONS__IDLE_TIMEOUT_SECS=600` sets
    /// `sessions.idle_timeout_secs`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(environment_source())
    }

    /// Builds the configuration from an explicit environment source.
    pub fn from_environment(source: config::Environment) -> Result<Self, ConfigError> {
        let settings = config::Config::builder().add_source(source).build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Cross-section checks, including the production HTTPS rule for contact links.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.sessions.validate()?;
        self.contact.validate(self.server.is_production())
    }
}

fn environment_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}
