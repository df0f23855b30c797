//! Failures while reading or checking configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A value that parsed but is out of bounds
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server port must not be 0")]
    InvalidPort,

    #[error("request timeout must be 1-300 seconds")]
    InvalidTimeout,

    #[error("session limit must be greater than zero")]
    InvalidSessionLimit,

    #[error("session idle timeout must be greater than zero")]
    InvalidIdleTimeout,

    #[error("contact base URL must start with http:// or https://")]
    InvalidContactUrl,

    #[error("contact base URL must use HTTPS in production")]
    ContactUrlMustBeHttps,
}
