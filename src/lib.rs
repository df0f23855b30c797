//! Strategy Wizard - Guided marketing-strategy questionnaire
//!
//! A six-step wizard collects answers about a product (type and lifecycle
//! stage, Ansoff market type, segmentation, Porter's five forces, and
//! distribution preferences) and a deterministic rule engine turns them
//! into strategy, pricing, promotion, distribution and messaging advice.
//!
//! The domain is pure; sessions live behind the `WizardSessionRepository`
//! port and are served over HTTP by the axum adapter.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
