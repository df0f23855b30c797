//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory session store
//! - `http` - axum REST API over the application handlers

pub mod http;
pub mod memory;

pub use http::build_app;
pub use memory::InMemoryWizardSessionRepository;
