//! BuildContactLinkHandler - Query handler producing the WhatsApp deep link.

use std::sync::Arc;

use tracing::debug;

use crate::domain::catalog::ReferenceTables;
use crate::domain::foundation::SessionId;
use crate::domain::recommendation::ContactLinkBuilder;
use crate::domain::wizard::WizardError;
use crate::ports::WizardSessionRepository;

/// The contact message and the link that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub message: String,
    pub url: String,
}

pub struct BuildContactLinkHandler {
    repository: Arc<dyn WizardSessionRepository>,
    tables: &'static ReferenceTables,
    builder: ContactLinkBuilder,
}

impl BuildContactLinkHandler {
    pub fn new(
        repository: Arc<dyn WizardSessionRepository>,
        tables: &'static ReferenceTables,
        builder: ContactLinkBuilder,
    ) -> Self {
        Self {
            repository,
            tables,
            builder,
        }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<ContactLink, WizardError> {
        let session = self
            .repository
            .find_by_id(&session_id)
            .await
            .map_err(|e| WizardError::from_repository(session_id, e))?
            .ok_or(WizardError::NotFound(session_id))?;

        let state = session.state();
        let link = ContactLink {
            message: self.builder.message(state, self.tables),
            url: self.builder.link(state, self.tables),
        };

        debug!(session_id = %session_id, "contact link built");
        Ok(link)
    }
}
