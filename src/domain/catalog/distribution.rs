//! Distribution channel selection framework.
//!
//! A channel is chosen from two answers: how customized the product is and
//! how concentrated the target market is. The four combinations map to four
//! fixed channel models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product customization level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Customization {
    High,
    Low,
}

impl Customization {
    pub fn key(&self) -> &'static str {
        match self {
            Customization::High => "high",
            Customization::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Customization::High => "High Customization",
            Customization::Low => "Low Customization",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Customization::High => "Tailored products, bespoke services",
            Customization::Low => "Standardized products, mass market",
        }
    }
}

/// Target market concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketConcentration {
    Concentrated,
    Fragmented,
}

impl MarketConcentration {
    pub fn key(&self) -> &'static str {
        match self {
            MarketConcentration::Concentrated => "concentrated",
            MarketConcentration::Fragmented => "fragmented",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketConcentration::Concentrated => "Concentrated Market",
            MarketConcentration::Fragmented => "Fragmented Market",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MarketConcentration::Concentrated => "Few large customers, B2B, niche segments",
            MarketConcentration::Fragmented => "Many small customers, B2C, mass market",
        }
    }
}

/// The two distribution answers collected in the Distribution step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistributionConfig {
    pub customization: Option<Customization>,
    pub market_concentration: Option<MarketConcentration>,
}

impl DistributionConfig {
    pub fn new(customization: Customization, market_concentration: MarketConcentration) -> Self {
        Self {
            customization: Some(customization),
            market_concentration: Some(market_concentration),
        }
    }

    /// Returns true once both answers are present.
    pub fn is_complete(&self) -> bool {
        self.key().is_some()
    }

    /// Composite catalog key, or `None` while either answer is missing.
    pub fn key(&self) -> Option<ChannelKey> {
        Some(ChannelKey {
            customization: self.customization?,
            concentration: self.market_concentration?,
        })
    }
}

/// Two-field key of the channel catalog.
///
/// Renders as `"{customization}-{concentration}"`, e.g. `high-concentrated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChannelKey {
    pub customization: Customization,
    pub concentration: MarketConcentration,
}

impl fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.customization.key(), self.concentration.key())
    }
}

/// A distribution channel recommendation with its trade-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelInfo {
    #[serde(skip)]
    pub key: ChannelKey,
    pub name: &'static str,
    pub model: &'static str,
    pub description: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub examples: &'static [&'static str],
}

impl ChannelInfo {
    /// `"{name} - {description}"`, the distribution line of a recommendation.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }

    pub fn offers(&self, example: &str) -> bool {
        self.examples.contains(&example)
    }
}

pub(crate) const CHANNELS: [ChannelInfo; 4] = [
    ChannelInfo {
        key: ChannelKey {
            customization: Customization::High,
            concentration: MarketConcentration::Concentrated,
        },
        name: "Direct Distribution",
        model: "VMS (Vertical Marketing System)",
        description: "Direct sales to concentrated customer base",
        pros: &[
            "Perfect control over placement and quality",
            "Enhanced consumer satisfaction",
            "Less response time to grievances",
        ],
        cons: &[
            "Requires huge investments",
            "May not be viable for low-margin products",
            "Potential loss of flexibility",
        ],
        examples: &[
            "Company-owned stores",
            "Direct sales force",
            "E-commerce platform",
            "B2B direct sales",
        ],
    },
    ChannelInfo {
        key: ChannelKey {
            customization: Customization::High,
            concentration: MarketConcentration::Fragmented,
        },
        name: "Franchise Operations",
        model: "Hybrid VMS",
        description: "Standardized operations through franchise network",
        pros: &[
            "Rapid market expansion",
            "Controlled brand experience",
            "Shared investment with franchisees",
            "Local market expertise",
        ],
        cons: &[
            "Franchisee management complexity",
            "Quality control challenges",
            "Profit sharing with franchisees",
        ],
        examples: &[
            "Fast food franchises",
            "Retail chain franchises",
            "Service franchises",
            "Master franchise model",
        ],
    },
    ChannelInfo {
        key: ChannelKey {
            customization: Customization::Low,
            concentration: MarketConcentration::Concentrated,
        },
        name: "Distribution + Personal Selling",
        model: "Hybrid Traditional",
        description: "Selected distributors with sales force support",
        pros: &[
            "Market access without heavy investment",
            "Sales force ensures customer relationships",
            "Flexibility in market coverage",
        ],
        cons: &[
            "Moderate control over distribution",
            "Coordination complexity",
            "Channel conflict potential",
        ],
        examples: &[
            "Industrial distributors",
            "B2B dealers with sales support",
            "Authorized dealers",
            "Value-added resellers",
        ],
    },
    ChannelInfo {
        key: ChannelKey {
            customization: Customization::Low,
            concentration: MarketConcentration::Fragmented,
        },
        name: "Third-Party Intensive Distribution",
        model: "Traditional Channel",
        description: "Maximum market coverage through multiple retailers",
        pros: &[
            "Better market access by appointing more retailers",
            "Low investment in distribution",
            "Wide availability",
        ],
        cons: &[
            "Focus on volume, not customer satisfaction",
            "Slow information flow",
            "Manufacturer has minimal or no control",
            "Frequent conflicts among channel members",
        ],
        examples: &[
            "Mass retailers",
            "Supermarkets",
            "Online marketplaces",
            "Wholesaler networks",
            "Multi-brand outlets",
        ],
    },
];
