//! Delivery time window single choice.

use super::{choice::SingleChoice, render_options, StepWidget, SubmitState};
use crate::{
    catalog::CatalogEntry,
    error::{Result, WizardError},
    models::{StepResult, WizardStep},
};

/// Time slot picker. Back is disabled while a submit is pending.
#[derive(Debug)]
pub struct DeliveryTime {
    choice: SingleChoice,
    submit: SubmitState,
}

impl DeliveryTime {
    pub fn new(slots: Vec<CatalogEntry>, chosen: Option<String>) -> Self {
        Self {
            choice: SingleChoice::new("time slot", slots, chosen),
            submit: SubmitState::default(),
        }
    }

    pub fn chosen(&self) -> Option<&str> {
        self.choice.chosen()
    }
}

impl StepWidget for DeliveryTime {
    fn step(&self) -> WizardStep {
        WizardStep::DeliveryTime
    }

    fn render_body(&self, out: &mut String) {
        render_options(out, self.choice.entries(), |e| self.choice.is_chosen(e));
    }

    fn select(&mut self, input: &str) -> Result<()> {
        self.choice.choose(input)
    }

    fn can_submit(&self) -> bool {
        self.choice.chosen().is_some()
    }

    fn result(&self) -> Result<StepResult> {
        self.choice
            .chosen()
            .map(|id| StepResult::DeliveryTime(id.to_string()))
            .ok_or_else(|| WizardError::incomplete(WizardStep::DeliveryTime, "choose a delivery time"))
    }

    fn can_retreat(&self) -> bool {
        !self.is_submitting()
    }

    fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    fn submit_state_mut(&mut self) -> &mut SubmitState {
        &mut self.submit
    }
}
