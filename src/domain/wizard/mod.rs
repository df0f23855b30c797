//! Wizard module - the six-step questionnaire as a pure state machine.
//!
//! - `step` - step sequence and transition rules
//! - `state` - the answers value and its operations
//! - `event` - selection/navigation events and their outcomes
//! - `progress` - progress snapshot for the presentation layer
//! - `session` - per-session aggregate owning one state
//! - `errors` - session-level failures

mod errors;
mod event;
mod progress;
mod session;
mod state;
mod step;

pub use errors::WizardError;
pub use event::{EventOutcome, Rejection, WizardEvent};
pub use progress::{StepProgress, StepStatus, WizardProgress};
pub use session::WizardSession;
pub use state::{Transition, WizardState};
pub use step::WizardStep;
