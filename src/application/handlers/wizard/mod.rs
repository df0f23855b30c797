//! Wizard handlers - Commands and queries over wizard sessions.
//!
//! Every handler loads the session through the repository port, runs the
//! pure domain operation, and returns a freshly derived [`WizardView`].

mod apply_event;
mod contact_link;
mod end_wizard;
mod get_view;
mod start_wizard;
mod view;

pub use apply_event::{ApplyWizardEventCommand, ApplyWizardEventHandler, ApplyWizardEventResult};
pub use contact_link::{BuildContactLinkHandler, ContactLink};
pub use end_wizard::EndWizardHandler;
pub use get_view::GetWizardViewHandler;
pub use start_wizard::StartWizardHandler;
pub use view::WizardView;
