//! Recommendation engine - maps wizard answers to strategy text.
//!
//! Pure domain service: no I/O, no hidden state. The same state and tables
//! always produce the same `RecommendationResult`.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CompetitiveForce, ProductStage, ProductType, ReferenceTables, Segmentation};
use crate::domain::wizard::WizardState;

/// Shown in place of a channel until both distribution answers are given.
pub const DISTRIBUTION_PLACEHOLDER: &str = "Complete distribution configuration to get recommendation";

/// Forces checked for messaging, in output order. Suppliers has no rule.
const MESSAGING_FORCES: [CompetitiveForce; 4] = [
    CompetitiveForce::Rivalry,
    CompetitiveForce::Buyers,
    CompetitiveForce::NewEntrants,
    CompetitiveForce::Substitutes,
];

/// Segments checked for messaging, in output order.
const MESSAGING_SEGMENTS: [Segmentation; 3] = [
    Segmentation::Loyalty,
    Segmentation::UsageRate,
    Segmentation::Psychographic,
];

/// Derived recommendations for one wizard state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub strategy: String,
    pub pricing: String,
    pub promotion: String,
    pub distribution: String,
    pub messaging: Vec<String>,
}

/// Pricing and promotion guidance for a lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleGuidance {
    pub pricing: &'static str,
    pub promotion: &'static str,
}

/// Computes the full recommendation set for `state`.
pub fn compute_recommendations(state: &WizardState, tables: &ReferenceTables) -> RecommendationResult {
    let guidance = state.product_stage().map(lifecycle_guidance);

    RecommendationResult {
        strategy: strategy_for(state, tables),
        pricing: guidance.map(|g| g.pricing).unwrap_or_default().to_string(),
        promotion: guidance.map(|g| g.promotion).unwrap_or_default().to_string(),
        distribution: distribution_for(state, tables),
        messaging: messaging_for(state),
    }
}

fn strategy_for(state: &WizardState, tables: &ReferenceTables) -> String {
    state
        .market_type()
        .and_then(|mt| tables.strategy(mt))
        .map(|s| s.label().to_string())
        .unwrap_or_default()
}

fn distribution_for(state: &WizardState, tables: &ReferenceTables) -> String {
    match tables.get_channel(state.distribution()) {
        Some(channel) => channel.summary(),
        None => DISTRIBUTION_PLACEHOLDER.to_string(),
    }
}

/// Fixed pricing/promotion text per product lifecycle stage.
pub fn lifecycle_guidance(stage: ProductStage) -> LifecycleGuidance {
    match stage {
        ProductStage::Introduction => LifecycleGuidance {
            promotion: "Focus on Information & Advertising to build awareness. Use promotion to induce trial. Less sales promotion, more advertising investment.",
            pricing: "Penetration pricing (low to gain market share) or Skimming pricing (high for innovative products)",
        },
        ProductStage::Growth => LifecycleGuidance {
            promotion: "Increase advertising to build preference. Sales promotions to attract new consumers and increase consumption.",
            pricing: "Maintain or slightly reduce prices to match competition and maximize market share",
        },
        ProductStage::Maturity => LifecycleGuidance {
            promotion: "Effort to induce different usages. More sales promotion, less advertising. Focus on attracting marginal customers and brand switching.",
            pricing: "Competitive pricing, promotional pricing to defend market share",
        },
        ProductStage::Decline => LifecycleGuidance {
            promotion: "Frequent sales promotions to liquidate stock. Extremely low advertising spend. Minimal promotional investment.",
            pricing: "Discount pricing to clear inventory, harvest profits",
        },
    }
}

/// Insight emitted when a force is rated High.
pub fn force_insight(force: CompetitiveForce) -> Option<&'static str> {
    match force {
        CompetitiveForce::Rivalry => Some("Differentiate strongly - high rivalry requires clear positioning"),
        CompetitiveForce::Buyers => Some("Focus on value proposition - buyers have strong bargaining power"),
        CompetitiveForce::NewEntrants => Some("Build brand loyalty quickly - threat of new entrants is high"),
        CompetitiveForce::Substitutes => Some("Emphasize unique benefits - substitutes pose a threat"),
        CompetitiveForce::Suppliers => None,
    }
}

pub fn product_insight(product_type: ProductType) -> Option<&'static str> {
    match product_type {
        ProductType::Luxury => Some("Premium positioning, emotional branding, exclusivity messaging"),
        ProductType::Fmcg => Some("Mass market appeal, convenience, value for money"),
        ProductType::Electronics => Some("Innovation focus, feature benefits, early adopter targeting"),
        ProductType::Service => None,
    }
}

pub fn segment_insight(segment: Segmentation) -> Option<&'static str> {
    match segment {
        Segmentation::Loyalty => Some("Implement loyalty programs and retention marketing"),
        Segmentation::UsageRate => Some("Tailor messaging for heavy vs. light users differently"),
        Segmentation::Psychographic => Some("Create lifestyle-based campaigns aligned with values"),
        Segmentation::UserStatus | Segmentation::Attitude | Segmentation::Demographic => None,
    }
}

// Order: high forces, then product type, then segments.
fn messaging_for(state: &WizardState) -> Vec<String> {
    let forces = MESSAGING_FORCES
        .iter()
        .filter(|f| state.force_level(**f).is_some_and(|level| level.is_high()))
        .filter_map(|f| force_insight(*f));

    let product = state.product_type().and_then(product_insight);

    let segments = MESSAGING_SEGMENTS
        .iter()
        .filter(|s| state.has_segment(**s))
        .filter_map(|s| segment_insight(*s));

    forces
        .chain(product)
        .chain(segments)
        .map(str::to_string)
        .collect()
}
