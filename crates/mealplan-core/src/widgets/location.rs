//! Delivery location single choice.

use super::{choice::SingleChoice, render_options, StepWidget, SubmitState};
use crate::{
    catalog::CatalogEntry,
    error::{Result, WizardError},
    models::{StepResult, WizardStep},
};

#[derive(Debug)]
pub struct LocationSelection {
    choice: SingleChoice,
    submit: SubmitState,
}

impl LocationSelection {
    pub fn new(locations: Vec<CatalogEntry>, chosen: Option<String>) -> Self {
        Self {
            choice: SingleChoice::new("location", locations, chosen),
            submit: SubmitState::default(),
        }
    }

    pub fn chosen(&self) -> Option<&str> {
        self.choice.chosen()
    }
}

impl StepWidget for LocationSelection {
    fn step(&self) -> WizardStep {
        WizardStep::Location
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
            .map(|id| StepResult::Location(id.to_string()))
            .ok_or_else(|| WizardError::incomplete(WizardStep::Location, "choose a delivery location"))
    }

    fn can_retreat(&self) -> bool {
        true
    }

    fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    fn submit_state_mut(&mut self) -> &mut SubmitState {
        &mut self.submit
    }
}
