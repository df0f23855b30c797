//! GetWizardViewHandler - Query handler returning the current view of a session.

use std::sync::Arc;

use super::WizardView;
use crate::domain::catalog::ReferenceTables;
use crate::domain::foundation::SessionId;
use crate::domain::wizard::WizardError;
use crate::ports::WizardSessionRepository;

pub struct GetWizardViewHandler {
    repository: Arc<dyn WizardSessionRepository>,
    tables: &'static ReferenceTables,
}

impl GetWizardViewHandler {
    pub fn new(repository: Arc<dyn WizardSessionRepository>, tables: &'static ReferenceTables) -> Self {
        Self { repository, tables }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<WizardView, WizardError> {
        let session = self
            .repository
            .find_by_id(&session_id)
            .await
            .map_err(|e| WizardError::from_repository(session_id, e))?
            .ok_or(WizardError::NotFound(session_id))?;

        Ok(WizardView::build(&session, self.tables))
    }
}
