//! HTTP routes for wizard endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    apply_event, end_wizard, get_channel, get_contact_link, get_recommendations, get_wizard,
    start_wizard, WizardHandlers,
};

/// Creates the wizard router with all endpoints.
pub fn wizard_routes(handlers: WizardHandlers) -> Router {
    Router::new()
        .route("/", post(start_wizard))
        .route("/:id", get(get_wizard).delete(end_wizard))
        .route("/:id/events", post(apply_event))
        .route("/:id/recommendations", get(get_recommendations))
        .route("/:id/channel", get(get_channel))
        .route("/:id/contact-link", get(get_contact_link))
        .with_state(handlers)
}
