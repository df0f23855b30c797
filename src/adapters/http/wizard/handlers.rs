//! HTTP handlers for wizard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::application::{
    ApplyWizardEventCommand, ApplyWizardEventHandler, BuildContactLinkHandler, EndWizardHandler,
    GetWizardViewHandler, StartWizardHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::wizard::{WizardError, WizardEvent};

use super::dto::{ApplyEventResponse, ContactLinkResponse, ErrorResponse, WizardViewResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WizardHandlers {
    start_handler: Arc<StartWizardHandler>,
    apply_handler: Arc<ApplyWizardEventHandler>,
    view_handler: Arc<GetWizardViewHandler>,
    contact_handler: Arc<BuildContactLinkHandler>,
    end_handler: Arc<EndWizardHandler>,
}

impl WizardHandlers {
    pub fn new(
        start_handler: Arc<StartWizardHandler>,
        apply_handler: Arc<ApplyWizardEventHandler>,
        view_handler: Arc<GetWizardViewHandler>,
        contact_handler: Arc<BuildContactLinkHandler>,
        end_handler: Arc<EndWizardHandler>,
    ) -> Self {
        Self {
            start_handler,
            apply_handler,
            view_handler,
            contact_handler,
            end_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/wizard - Start a new session
pub async fn start_wizard(State(handlers): State<WizardHandlers>) -> Response {
    match handlers.start_handler.handle().await {
        Ok(view) => {
            let response: WizardViewResponse = view.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_wizard_error(e),
    }
}

/// GET /api/wizard/:id - Current view of a session
pub async fn get_wizard(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.view_handler.handle(session_id).await {
        Ok(view) => {
            let response: WizardViewResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_wizard_error(e),
    }
}

/// POST /api/wizard/:id/events - Apply one selection or navigation event
pub async fn apply_event(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
    Json(event): Json<WizardEvent>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ApplyWizardEventCommand { session_id, event };

    match handlers.apply_handler.handle(cmd).await {
        Ok(result) => {
            let response: ApplyEventResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_wizard_error(e),
    }
}

/// GET /api/wizard/:id/recommendations - Derived recommendations only
pub async fn get_recommendations(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.view_handler.handle(session_id).await {
        Ok(view) => (StatusCode::OK, Json(view.recommendations)).into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

/// GET /api/wizard/:id/channel - Resolved distribution channel, or null
pub async fn get_channel(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.view_handler.handle(session_id).await {
        Ok(view) => (StatusCode::OK, Json(view.channel)).into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

/// GET /api/wizard/:id/contact-link - WhatsApp deep link for the session
pub async fn get_contact_link(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.contact_handler.handle(session_id).await {
        Ok(link) => {
            let response: ContactLinkResponse = link.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_wizard_error(e),
    }
}

/// DELETE /api/wizard/:id - End a session
pub async fn end_wizard(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.end_handler.handle(session_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn handle_wizard_error(error: WizardError) -> Response {
    let status = match &error {
        WizardError::NotFound(_) => StatusCode::NOT_FOUND,
        WizardError::CapacityExceeded(_) => StatusCode::SERVICE_UNAVAILABLE,
        WizardError::Infrastructure(msg) => {
            warn!(error = %msg, "wizard request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::from_wizard_error(&error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_error_not_found_maps_to_404() {
        let response = handle_wizard_error(WizardError::NotFound(SessionId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn wizard_error_capacity_maps_to_503() {
        let response = handle_wizard_error(WizardError::CapacityExceeded("full".to_string()));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn wizard_error_infrastructure_maps_to_500() {
        let response = handle_wizard_error(WizardError::Infrastructure("lock poisoned".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn malformed_id_is_bad_request() {
        let response = parse_session_id("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
