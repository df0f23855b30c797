//! HTTP adapter for wizard session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ApplyEventResponse, ContactLinkResponse, ErrorResponse, WizardViewResponse};
pub use handlers::WizardHandlers;
pub use routes::wizard_routes;
