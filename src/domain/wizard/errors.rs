//! Wizard session error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

/// Errors raised while handling a wizard session request.
///
/// Rejected navigation is not an error; it is reported through
/// [`EventOutcome`](super::EventOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Wizard session {0} not found")]
    NotFound(SessionId),

    #[error("Session capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl WizardError {
    pub fn not_found(id: SessionId) -> Self {
        WizardError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::NotFound(_) => ErrorCode::SessionNotFound,
            WizardError::CapacityExceeded(_) => ErrorCode::CapacityExceeded,
            WizardError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Maps a repository error, attaching the session it concerned.
    pub fn from_repository(id: SessionId, err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionNotFound => WizardError::NotFound(id),
            ErrorCode::CapacityExceeded => WizardError::CapacityExceeded(err.message),
            _ => WizardError::Infrastructure(err.to_string()),
        }
    }
}
