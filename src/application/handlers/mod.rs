//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod wizard;

pub use wizard::{
    ApplyWizardEventCommand, ApplyWizardEventHandler, ApplyWizardEventResult,
    BuildContactLinkHandler, ContactLink, EndWizardHandler, GetWizardViewHandler,
    StartWizardHandler, WizardView,
};
