//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `catalog` - Static reference tables (products, Ansoff matrix, segments, forces, channels)
//! - `wizard` - Six-step questionnaire state, events and sessions
//! - `recommendation` - Pure rule evaluation over a wizard state

pub mod catalog;
pub mod foundation;
pub mod recommendation;
pub mod wizard;
