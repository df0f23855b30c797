//! Customer segmentation criteria.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A segmentation criterion. Ordering follows the catalog, so a
/// `BTreeSet<Segmentation>` iterates in the order the options are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Segmentation {
    UserStatus,
    UsageRate,
    Loyalty,
    Attitude,
    Demographic,
    Psychographic,
}

impl Segmentation {
    pub fn all() -> &'static [Segmentation] {
        &[
            Segmentation::UserStatus,
            Segmentation::UsageRate,
            Segmentation::Loyalty,
            Segmentation::Attitude,
            Segmentation::Demographic,
            Segmentation::Psychographic,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Segmentation::UserStatus => "user-status",
            Segmentation::UsageRate => "usage-rate",
            Segmentation::Loyalty => "loyalty",
            Segmentation::Attitude => "attitude",
            Segmentation::Demographic => "demographic",
            Segmentation::Psychographic => "psychographic",
        }
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentationInfo {
    pub key: Segmentation,
    pub name: &'static str,
    pub description: &'static str,
}

pub(crate) const SEGMENTATION_OPTIONS: [SegmentationInfo; 6] = [
    SegmentationInfo {
        key: Segmentation::UserStatus,
        name: "User Status",
        description: "Non-users, potential users, regular users",
    },
    SegmentationInfo {
        key: Segmentation::UsageRate,
        name: "Usage Rate",
        description: "Light, medium, heavy users",
    },
    SegmentationInfo {
        key: Segmentation::Loyalty,
        name: "Loyalty",
        description: "Brand loyal, switchers, competitors",
    },
    SegmentationInfo {
        key: Segmentation::Attitude,
        name: "Attitude",
        description: "Enthusiastic, positive, negative",
    },
    SegmentationInfo {
        key: Segmentation::Demographic,
        name: "Demographic",
        description: "Age, income, education, family size",
    },
    SegmentationInfo {
        key: Segmentation::Psychographic,
        name: "Psychographic",
        description: "Lifestyle, values, personality",
    },
];
