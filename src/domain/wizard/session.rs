//! WizardSession aggregate.
//!
//! A session owns exactly one `WizardState` and replaces it wholesale after
//! every event. Sessions never share state with each other.

use serde::{Deserialize, Serialize};

use super::{EventOutcome, WizardEvent, WizardState};
use crate::domain::catalog::ReferenceTables;
use crate::domain::foundation::{SessionId, Timestamp};

/// One user's run through the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSession {
    id: SessionId,
    state: WizardState,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl WizardSession {
    /// Starts a session with a fresh state.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            state: WizardState::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Applies an event; `updated_at` only moves when the event is accepted.
    pub fn apply(&mut self, event: &WizardEvent, tables: &ReferenceTables) -> EventOutcome {
        let transition = self.state.apply(event, tables);
        if transition.outcome.is_applied() {
            self.state = transition.state;
            self.updated_at = Timestamp::now();
        }
        transition.outcome
    }
}
