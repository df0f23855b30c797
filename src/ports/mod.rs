//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WizardSessionRepository` - storage of per-session wizard state

mod wizard_session_repository;

pub use wizard_session_repository::{SessionMutation, WizardSessionRepository};
