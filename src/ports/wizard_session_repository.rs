//! Wizard session repository port.
//!
//! Defines the contract for storing one `WizardSession` per session id.
//! Implementations must keep sessions isolated: writing one session never
//! touches another.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::wizard::{EventOutcome, WizardSession};
use async_trait::async_trait;

/// Change applied to a stored session while the repository holds it exclusively.
pub type SessionMutation = Box<dyn FnOnce(&mut WizardSession) -> EventOutcome + Send>;

/// Repository port for WizardSession persistence.
#[async_trait]
pub trait WizardSessionRepository: Send + Sync {
    /// Store a new session.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` if the store is full
    async fn create(&self, session: &WizardSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<WizardSession>, DomainError>;

    /// Run `mutation` against the stored session and keep its result.
    ///
    /// No other write to the same session may interleave between reading
    /// and storing it. Returns the mutation's outcome and the stored session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn modify(
        &self,
        id: &SessionId,
        mutation: SessionMutation,
    ) -> Result<(EventOutcome, WizardSession), DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;

    /// Number of live sessions.
    async fn count(&self) -> Result<usize, DomainError>;
}
