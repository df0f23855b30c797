//! HTTP DTOs for wizard endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::Serialize;

use crate::application::{ApplyWizardEventResult, ContactLink, WizardView};
use crate::domain::catalog::ChannelInfo;
use crate::domain::recommendation::RecommendationResult;
use crate::domain::wizard::{EventOutcome, WizardError, WizardProgress, WizardState, WizardStep};

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full view of one wizard session.
#[derive(Debug, Clone, Serialize)]
pub struct WizardViewResponse {
    pub session_id: String,
    pub step: WizardStep,
    pub step_number: u8,
    pub step_name: &'static str,
    pub can_proceed: bool,
    pub can_go_back: bool,
    pub progress: WizardProgress,
    pub state: WizardState,
    pub recommendations: RecommendationResult,
    pub channel: Option<&'static ChannelInfo>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<WizardView> for WizardViewResponse {
    fn from(view: WizardView) -> Self {
        Self {
            session_id: view.session_id.to_string(),
            step: view.step,
            step_number: view.step.number(),
            step_name: view.step.display_name(),
            can_proceed: view.can_proceed,
            can_go_back: view.can_go_back,
            progress: view.progress,
            state: view.state,
            recommendations: view.recommendations,
            channel: view.channel,
            created_at: view.created_at.to_rfc3339(),
            updated_at: view.updated_at.to_rfc3339(),
        }
    }
}

/// Result of posting an event: whether it applied, and the refreshed view.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyEventResponse {
    pub outcome: EventOutcome,
    pub view: WizardViewResponse,
}

impl From<ApplyWizardEventResult> for ApplyEventResponse {
    fn from(result: ApplyWizardEventResult) -> Self {
        Self {
            outcome: result.outcome,
            view: result.view.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactLinkResponse {
    pub url: String,
    pub message: String,
}

impl From<ContactLink> for ContactLinkResponse {
    fn from(link: ContactLink) -> Self {
        Self {
            url: link.url,
            message: link.message,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn from_wizard_error(error: &WizardError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}
