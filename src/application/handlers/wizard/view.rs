//! WizardView - everything the presentation layer needs after an event.

use crate::domain::catalog::{ChannelInfo, ReferenceTables};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::recommendation::{compute_recommendations, RecommendationResult};
use crate::domain::wizard::{WizardProgress, WizardSession, WizardState, WizardStep};

/// Derived read model for one session, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub session_id: SessionId,
    pub state: WizardState,
    pub step: WizardStep,
    pub can_proceed: bool,
    pub can_go_back: bool,
    pub progress: WizardProgress,
    pub recommendations: RecommendationResult,
    pub channel: Option<&'static ChannelInfo>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WizardView {
    pub fn build(session: &WizardSession, tables: &ReferenceTables) -> Self {
        let state = session.state();
        Self {
            session_id: *session.id(),
            state: state.clone(),
            step: state.step(),
            can_proceed: state.can_proceed(),
            can_go_back: state.can_go_back(),
            progress: WizardProgress::for_step(state.step()),
            recommendations: compute_recommendations(state, tables),
            channel: tables.get_channel(state.distribution()),
            created_at: *session.created_at(),
            updated_at: *session.updated_at(),
        }
    }
}
