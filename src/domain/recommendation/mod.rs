//! Recommendation module - derived outputs of a wizard state.
//!
//! - `engine` - strategy, pricing, promotion, distribution and messaging rules
//! - `contact_link` - WhatsApp deep link summarising the chosen channel

mod contact_link;
mod engine;

pub use contact_link::{ContactLinkBuilder, DEFAULT_WHATSAPP_BASE};
pub use engine::{
    compute_recommendations, force_insight, lifecycle_guidance, product_insight, segment_insight,
    LifecycleGuidance, RecommendationResult, DISTRIBUTION_PLACEHOLDER,
};
