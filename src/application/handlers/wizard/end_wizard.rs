//! EndWizardHandler - Command handler discarding a session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::wizard::WizardError;
use crate::ports::WizardSessionRepository;

pub struct EndWizardHandler {
    repository: Arc<dyn WizardSessionRepository>,
}

impl EndWizardHandler {
    pub fn new(repository: Arc<dyn WizardSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<(), WizardError> {
        self.repository
            .delete(&session_id)
            .await
            .map_err(|e| WizardError::from_repository(session_id, e))?;

        info!(session_id = %session_id, "wizard session ended");
        Ok(())
    }
}
