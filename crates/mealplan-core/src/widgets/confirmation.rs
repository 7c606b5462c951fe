//! Final review screen.

use std::fmt::Write;

use super::{StepWidget, SubmitState};
use crate::{
    catalog::Catalog,
    error::{Result, WizardError},
    models::{PlanDraft, StepResult, WizardStep},
};

/// Shows the assembled plan; confirming hands it to the submission gateway.
#[derive(Debug)]
pub struct Confirmation {
    days: Vec<String>,
    location: Option<String>,
    time_slot: Option<String>,
    submit: SubmitState,
}

impl Confirmation {
    /// Captures display labels for the draft at mount time.
    pub fn new(catalog: &Catalog, draft: &PlanDraft) -> Self {
        Self {
            days: catalog
                .weekday_labels(&draft.selected_days)
                .into_iter()
                .map(String::from)
                .collect(),
            location: draft
                .delivery_location
                .as_deref()
                .map(|id| catalog.location_label(id).to_string()),
            time_slot: draft
                .delivery_time_slot
                .as_deref()
                .map(|id| catalog.time_slot_label(id).to_string()),
            submit: SubmitState::default(),
        }
    }
}

impl StepWidget for Confirmation {
    fn step(&self) -> WizardStep {
        WizardStep::Confirmation
    }

    fn render_body(&self, out: &mut String) {
        let _ = writeln!(out, "- **Jours** : {}", self.days.join(", "));
        let _ = writeln!(
            out,
            "- **Lieu** : {}",
            self.location.as_deref().unwrap_or("-")
        );
        let _ = writeln!(
            out,
            "- **Créneau** : {}",
            self.time_slot.as_deref().unwrap_or("-")
        );
    }

    fn select(&mut self, input: &str) -> Result<()> {
        Err(WizardError::UnknownOption {
            field: "confirmation".to_string(),
            value: input.to_string(),
        })
    }

    fn can_submit(&self) -> bool {
        true
    }

    fn result(&self) -> Result<StepResult> {
        Ok(StepResult::Confirmed)
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
