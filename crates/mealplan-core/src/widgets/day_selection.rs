//! Weekday multi-select, the first wizard step.

use std::collections::BTreeSet;

use super::{render_options, StepWidget, SubmitState};
use crate::{
    catalog::{resolve, CatalogEntry},
    error::{Result, WizardError},
    models::{StepResult, WizardStep},
};

/// Toggles weekdays on and off; submit needs at least one.
#[derive(Debug)]
pub struct DaySelection {
    weekdays: Vec<CatalogEntry>,
    selected: BTreeSet<String>,
    submit: SubmitState,
}

impl DaySelection {
    pub fn new(weekdays: Vec<CatalogEntry>, selected: BTreeSet<String>) -> Self {
        let selected = selected
            .into_iter()
            .filter(|id| weekdays.iter().any(|e| &e.id == id))
            .collect();
        Self {
            weekdays,
            selected,
            submit: SubmitState::default(),
        }
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Adds the day if absent, removes it if present.
    pub fn toggle(&mut self, input: &str) -> Result<()> {
        let id = resolve(&self.weekdays, "weekday", input)?.id.clone();
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        Ok(())
    }
}

impl StepWidget for DaySelection {
    fn step(&self) -> WizardStep {
        WizardStep::DaySelection
    }

    fn render_body(&self, out: &mut String) {
        render_options(out, &self.weekdays, |e| self.selected.contains(&e.id));
    }

    fn select(&mut self, input: &str) -> Result<()> {
        self.toggle(input)
    }

    fn can_submit(&self) -> bool {
        !self.selected.is_empty()
    }

    fn result(&self) -> Result<StepResult> {
        if self.selected.is_empty() {
            return Err(WizardError::incomplete(
                WizardStep::DaySelection,
                "select at least one day",
            ));
        }
        Ok(StepResult::Days(self.selected.clone()))
    }

    fn can_retreat(&self) -> bool {
        false
    }

    fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    fn submit_state_mut(&mut self) -> &mut SubmitState {
        &mut self.submit
    }
}
