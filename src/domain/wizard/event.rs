//! Discrete input events and the outcome of applying them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::WizardStep;
use crate::domain::catalog::{
    CompetitiveForce, Customization, ForceLevel, MarketConcentration, MarketType, ProductStage,
    ProductType, Segmentation,
};

/// A single user action: a selection or a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    SelectProductType { product_type: ProductType },
    SelectProductStage { stage: ProductStage },
    SelectMarketType { market_type: MarketType },
    AddSegment { segment: Segmentation },
    RemoveSegment { segment: Segmentation },
    ToggleSegment { segment: Segmentation },
    RateForce { force: CompetitiveForce, level: ForceLevel },
    SelectCustomization { customization: Customization },
    SelectConcentration { concentration: MarketConcentration },
    SelectChannel { channel: String },
    ClearChannel,
    Next,
    Previous,
    Reset,
}

impl WizardEvent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WizardEvent::SelectProductType { .. } => "select_product_type",
            WizardEvent::SelectProductStage { .. } => "select_product_stage",
            WizardEvent::SelectMarketType { .. } => "select_market_type",
            WizardEvent::AddSegment { .. } => "add_segment",
            WizardEvent::RemoveSegment { .. } => "remove_segment",
            WizardEvent::ToggleSegment { .. } => "toggle_segment",
            WizardEvent::RateForce { .. } => "rate_force",
            WizardEvent::SelectCustomization { .. } => "select_customization",
            WizardEvent::SelectConcentration { .. } => "select_concentration",
            WizardEvent::SelectChannel { .. } => "select_channel",
            WizardEvent::ClearChannel => "clear_channel",
            WizardEvent::Next => "next",
            WizardEvent::Previous => "previous",
            WizardEvent::Reset => "reset",
        }
    }
}

/// Why an event left the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Rejection {
    #[error("Step '{step}' is not complete yet")]
    StepIncomplete { step: WizardStep },

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Already at the last step")]
    AtLastStep,

    #[error("No distribution channel is resolved yet")]
    NoChannelResolved,

    #[error("Channel option '{channel}' is not offered by the recommended channel")]
    ChannelNotOffered { channel: String },
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EventOutcome {
    Applied,
    Rejected { reason: Rejection },
}

impl EventOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EventOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            EventOutcome::Applied => None,
            EventOutcome::Rejected { reason } => Some(reason),
        }
    }
}

impl From<Rejection> for EventOutcome {
    fn from(reason: Rejection) -> Self {
        EventOutcome::Rejected { reason }
    }
}
