//! ApplyWizardEventHandler - Command handler for selection and navigation events.

use std::sync::Arc;

use tracing::{debug, info};

use super::WizardView;
use crate::domain::catalog::ReferenceTables;
use crate::domain::foundation::SessionId;
use crate::domain::wizard::{EventOutcome, WizardError, WizardEvent, WizardSession};
use crate::ports::WizardSessionRepository;

/// Command to apply one event to a session.
#[derive(Debug, Clone)]
pub struct ApplyWizardEventCommand {
    pub session_id: SessionId,
    pub event: WizardEvent,
}

/// Outcome of the event plus the refreshed view.
#[derive(Debug, Clone)]
pub struct ApplyWizardEventResult {
    pub outcome: EventOutcome,
    pub view: WizardView,
}

pub struct ApplyWizardEventHandler {
    repository: Arc<dyn WizardSessionRepository>,
    tables: &'static ReferenceTables,
}

impl ApplyWizardEventHandler {
    pub fn new(repository: Arc<dyn WizardSessionRepository>, tables: &'static ReferenceTables) -> Self {
        Self { repository, tables }
    }

    pub async fn handle(
        &self,
        cmd: ApplyWizardEventCommand,
    ) -> Result<ApplyWizardEventResult, WizardError> {
        let tables = self.tables;
        let event = cmd.event.clone();
        let (outcome, session) = self
            .repository
            .modify(
                &cmd.session_id,
                Box::new(move |session: &mut WizardSession| session.apply(&event, tables)),
            )
            .await
            .map_err(|e| WizardError::from_repository(cmd.session_id, e))?;

        match outcome.rejection() {
            None => {
                debug!(
                    session_id = %cmd.session_id,
                    event = cmd.event.kind(),
                    to = %session.state().step(),
                    "wizard event applied"
                );
            }
            Some(reason) => {
                info!(
                    session_id = %cmd.session_id,
                    event = cmd.event.kind(),
                    step = %session.state().step(),
                    %reason,
                    "wizard event rejected"
                );
            }
        }

        Ok(ApplyWizardEventResult {
            outcome,
            view: WizardView::build(&session, self.tables),
        })
    }
}
