//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and the error type that form the
//! vocabulary of the wizard domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::SessionId;
pub use timestamp::Timestamp;
