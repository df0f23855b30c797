//! WizardStep enum representing the six linear questionnaire steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six wizard steps, numbered 1–6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Product,
    Market,
    Segments,
    Forces,
    Distribution,
    Results,
}

impl WizardStep {
    /// The canonical order of steps.
    pub const ORDER: [WizardStep; 6] = [
        WizardStep::Product,
        WizardStep::Market,
        WizardStep::Segments,
        WizardStep::Forces,
        WizardStep::Distribution,
        WizardStep::Results,
    ];

    pub const LAST: WizardStep = WizardStep::Results;

    pub fn all() -> &'static [WizardStep; 6] {
        &Self::ORDER
    }

    /// Returns the 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Product => 1,
            WizardStep::Market => 2,
            WizardStep::Segments => 3,
            WizardStep::Forces => 4,
            WizardStep::Distribution => 5,
            WizardStep::Results => 6,
        }
    }

    /// Returns the next step in order, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::ORDER.get(self.number() as usize).copied()
    }

    /// Returns the previous step in order, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        match self.number() {
            1 => None,
            n => Self::ORDER.get(n as usize - 2).copied(),
        }
    }

    /// Returns the label shown in the step indicator.
    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Product => "Product",
            WizardStep::Market => "Market",
            WizardStep::Segments => "Segments",
            WizardStep::Forces => "Forces",
            WizardStep::Distribution => "Distribution",
            WizardStep::Results => "Results",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
