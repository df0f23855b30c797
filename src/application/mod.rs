//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (start, apply event, end) are kept apart from query
//! handlers (view, contact link).

pub mod handlers;

pub use handlers::{
    ApplyWizardEventCommand, ApplyWizardEventHandler, ApplyWizardEventResult,
    BuildContactLinkHandler, ContactLink, EndWizardHandler, GetWizardViewHandler,
    StartWizardHandler, WizardView,
};
