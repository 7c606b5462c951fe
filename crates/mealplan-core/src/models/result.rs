//! Values produced by step widgets on submit.

use std::collections::BTreeSet;

use super::WizardStep;

/// The draft value a widget emits when its step is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// Selected weekday identifiers
    Days(BTreeSet<String>),
    /// Motivation screen passed
    Motivation,
    /// Chosen location identifier
    Location(String),
    /// Chosen time slot identifier
    DeliveryTime(String),
    /// Plan confirmed on the last screen
    Confirmed,
}

impl StepResult {
    /// The step this result belongs to.
    pub fn step(&self) -> WizardStep {
        match self {
            StepResult::Days(_) => WizardStep::DaySelection,
            StepResult::Motivation => WizardStep::Motivation,
            StepResult::Location(_) => WizardStep::Location,
            StepResult::DeliveryTime(_) => WizardStep::DeliveryTime,
            StepResult::Confirmed => WizardStep::Confirmation,
        }
    }
}
