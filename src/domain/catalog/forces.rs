//! Porter's five competitive forces and their intensity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of Porter's five forces, in assessment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompetitiveForce {
    Rivalry,
    Suppliers,
    Buyers,
    NewEntrants,
    Substitutes,
}

impl CompetitiveForce {
    pub const COUNT: usize = 5;

    pub fn all() -> &'static [CompetitiveForce] {
        &[
            CompetitiveForce::Rivalry,
            CompetitiveForce::Suppliers,
            CompetitiveForce::Buyers,
            CompetitiveForce::NewEntrants,
            CompetitiveForce::Substitutes,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            CompetitiveForce::Rivalry => "rivalry",
            CompetitiveForce::Suppliers => "suppliers",
            CompetitiveForce::Buyers => "buyers",
            CompetitiveForce::NewEntrants => "newEntrants",
            CompetitiveForce::Substitutes => "substitutes",
        }
    }

    /// Question shown to the user when rating the force.
    pub fn label(&self) -> &'static str {
        match self {
            CompetitiveForce::Rivalry => "Existing Rivalry Between Firms",
            CompetitiveForce::Suppliers => "Bargaining Power of Suppliers",
            CompetitiveForce::Buyers => "Bargaining Power of Customers",
            CompetitiveForce::NewEntrants => "Threat of New Entrants",
            CompetitiveForce::Substitutes => "Threat of Substitutes",
        }
    }
}

impl fmt::Display for CompetitiveForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Perceived intensity of a force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ForceLevel {
    Low,
    Medium,
    High,
}

impl ForceLevel {
    pub fn all() -> &'static [ForceLevel] {
        &[ForceLevel::Low, ForceLevel::Medium, ForceLevel::High]
    }

    pub fn is_high(&self) -> bool {
        matches!(self, ForceLevel::High)
    }
}

impl fmt::Display for ForceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ForceLevel::Low => "Low",
            ForceLevel::Medium => "Medium",
            ForceLevel::High => "High",
        };
        write!(f, "{}", s)
    }
}
