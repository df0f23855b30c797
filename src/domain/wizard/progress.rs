//! WizardProgress value object - where the user is in the six steps.
//!
//! Feeds the presentation layer's progress bar and step indicator.

use serde::Serialize;

use super::WizardStep;

/// Position of a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: WizardStep,
    pub number: u8,
    pub label: &'static str,
    pub status: StepStatus,
}

/// A read-only snapshot of wizard progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    pub current: WizardStep,
    pub percent_complete: u8,
    pub steps: Vec<StepProgress>,
}

impl WizardProgress {
    pub fn for_step(current: WizardStep) -> Self {
        let steps = WizardStep::all()
            .iter()
            .map(|step| StepProgress {
                step: *step,
                number: step.number(),
                label: step.display_name(),
                status: match step.cmp(&current) {
                    std::cmp::Ordering::Less => StepStatus::Completed,
                    std::cmp::Ordering::Equal => StepStatus::Current,
                    std::cmp::Ordering::Greater => StepStatus::Upcoming,
                },
            })
            .collect();

        Self {
            current,
            percent_complete: Self::percent_for(current),
            steps,
        }
    }

    /// `(step - 1) / 5` as a percentage: 0 on the first step, 100 on Results.
    fn percent_for(step: WizardStep) -> u8 {
        let done = (step.number() - 1) as u16;
        let span = (WizardStep::LAST.number() - 1) as u16;
        ((done * 100) / span) as u8
    }
}
