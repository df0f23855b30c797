//! StartWizardHandler - Command handler for opening a new wizard session.

use std::sync::Arc;

use tracing::info;

use super::WizardView;
use crate::domain::catalog::ReferenceTables;
use crate::domain::foundation::SessionId;
use crate::domain::wizard::{WizardError, WizardSession};
use crate::ports::WizardSessionRepository;

/// Handler for starting sessions.
pub struct StartWizardHandler {
    repository: Arc<dyn WizardSessionRepository>,
    tables: &'static ReferenceTables,
}

impl StartWizardHandler {
    pub fn new(repository: Arc<dyn WizardSessionRepository>, tables: &'static ReferenceTables) -> Self {
        Self { repository, tables }
    }

    pub async fn handle(&self) -> Result<WizardView, WizardError> {
        let session = WizardSession::new(SessionId::new());

        self.repository
            .create(&session)
            .await
            .map_err(|e| WizardError::from_repository(*session.id(), e))?;

        info!(session_id = %session.id(), "wizard session started");

        Ok(WizardView::build(&session, self.tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWizardSessionRepository;
    use crate::domain::wizard::{WizardState, WizardStep};

    #[tokio::test]
    async fn starts_session_at_step_one_and_stores_it() {
        let repo = Arc::new(InMemoryWizardSessionRepository::default());
        let handler = StartWizardHandler::new(repo.clone(), ReferenceTables::standard());

        let view = handler.handle().await.unwrap();

        assert_eq!(view.step, WizardStep::Product);
        assert_eq!(view.state, WizardState::new());
        let stored = repo.find_by_id(&view.session_id).await.unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn reports_capacity_exceeded() {
        let repo = Arc::new(InMemoryWizardSessionRepository::new(1));
        let handler = StartWizardHandler::new(repo, ReferenceTables::standard());

        handler.handle().await.unwrap();
        let err = handler.handle().await.unwrap_err();

        assert!(matches!(err, WizardError::CapacityExceeded(_)));
    }
}
