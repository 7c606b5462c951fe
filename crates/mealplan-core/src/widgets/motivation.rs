//! Informational screen between day and location selection.

use super::{StepWidget, SubmitState};
use crate::{
    error::{Result, WizardError},
    models::{StepResult, WizardStep},
};

const PITCH: &[&str] = &[
    "Fini les files d'attente : votre repas arrive à l'heure choisie.",
    "Des plats variés, préparés par des restaurateurs partenaires.",
    "Un seul plan pour toute la semaine, modifiable à tout moment.",
];

/// Stateless pacing screen; submit is always enabled.
#[derive(Debug, Default)]
pub struct Motivation {
    submit: SubmitState,
}

impl Motivation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepWidget for Motivation {
    fn step(&self) -> WizardStep {
        WizardStep::Motivation
    }

    fn render_body(&self, out: &mut String) {
        for line in PITCH {
            out.push_str("- ");
            out.push_str(line);
            out.push('\n');
        }
    }

    fn select(&mut self, input: &str) -> Result<()> {
        Err(WizardError::UnknownOption {
            field: "motivation".to_string(),
            value: input.to_string(),
        })
    }

    fn can_submit(&self) -> bool {
        true
    }

    fn result(&self) -> Result<StepResult> {
        Ok(StepResult::Motivation)
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
