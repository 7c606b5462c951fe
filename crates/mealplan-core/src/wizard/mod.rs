//! Step transition controller for the planning wizard.
//!
//! [`Wizard`] owns the current [`WizardPosition`] and the accumulated
//! [`PlanDraft`]. It is a plain value: callers own it and thread it through
//! each transition, there is no shared or global wizard state.
//!
//! ```text
//!   advance (guarded)     advance (guarded)     advance         advance
//! Days ──────────▶ Motivation ──────▶ Location ──────▶ Time ──────▶ Confirmation
//!      ◀──────────            ◀──────          ◀──────      ◀──────
//!        retreat (floored at Days)              restart: any ──▶ Days
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mealplan_core::{Catalog, StepResult, Wizard, WizardStep};
//!
//! let mut wizard = Wizard::new(Catalog::default());
//! let days = ["tuesday".to_string()].into_iter().collect();
//! wizard.advance(StepResult::Days(days))?;
//! assert_eq!(wizard.current_step(), WizardStep::Motivation);
//!
//! wizard.retreat();
//! assert_eq!(wizard.current_step(), WizardStep::DaySelection);
//! assert!(!wizard.draft().selected_days.is_empty());
//! # Ok::<(), mealplan_core::WizardError>(())
//! ```

use log::debug;

use crate::{
    catalog::{Catalog, CatalogEntry},
    error::{Result, WizardError},
    models::{CompletedPlan, PlanDraft, StepResult, WizardPosition, WizardStep},
};


/// Owns wizard position and draft, and applies transitions.
#[derive(Debug, Clone)]
pub struct Wizard {
    catalog: Catalog,
    position: WizardPosition,
    draft: PlanDraft,
}

impl Wizard {
    /// Creates a wizard on the first step with an empty draft.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            position: WizardPosition::start(),
            draft: PlanDraft::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn position(&self) -> WizardPosition {
        self.position
    }

    pub fn current_step(&self) -> WizardStep {
        self.position.step()
    }

    pub fn draft(&self) -> &PlanDraft {
        &self.draft
    }

    /// The draft as a submission payload, once every field is set.
    pub fn completed_plan(&self) -> Option<CompletedPlan> {
        self.draft.completed(&self.catalog)
    }

    /// True once the confirmation step is reached.
    pub fn is_terminal(&self) -> bool {
        self.position.is_terminal()
    }

    /// Merges the current step's result into the draft and moves forward.
    ///
    /// The result must belong to the current step and satisfy its selection
    /// constraint; otherwise nothing changes and an error is returned. At the
    /// confirmation step the position stays put.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepMismatch` if the result is for another step,
    /// `WizardError::IncompleteStep` for an empty selection and
    /// `WizardError::UnknownOption` for a value outside the catalog.
    pub fn advance(&mut self, result: StepResult) -> Result<WizardStep> {
        let current = self.current_step();
        if result.step() != current {
            return Err(WizardError::StepMismatch {
                expected: current,
                found: result.step(),
            });
        }

        match result {
            StepResult::Days(days) => {
                if days.is_empty() {
                    return Err(WizardError::incomplete(current, "select at least one day"));
                }
                for day in &days {
                    ensure_known(&self.catalog.weekdays, "weekday", day)?;
                }
                self.draft.selected_days = days;
            }
            StepResult::Motivation => self.draft.motivation_acknowledged = true,
            StepResult::Location(location) => {
                if location.trim().is_empty() {
                    return Err(WizardError::incomplete(current, "choose a delivery location"));
                }
                ensure_known(&self.catalog.locations, "location", &location)?;
                self.draft.delivery_location = Some(location);
            }
            StepResult::DeliveryTime(slot) => {
                if slot.trim().is_empty() {
                    return Err(WizardError::incomplete(current, "choose a delivery time"));
                }
                ensure_known(&self.catalog.time_slots, "time slot", &slot)?;
                self.draft.delivery_time_slot = Some(slot);
            }
            StepResult::Confirmed => {}
        }

        self.position.forward();
        debug!("wizard advanced from {current} to {}", self.current_step());
        Ok(self.current_step())
    }

    /// Moves one step back, never below the first step. The draft is kept.
    pub fn retreat(&mut self) -> WizardStep {
        let from = self.current_step();
        self.position.backward();
        debug!("wizard retreated from {from} to {}", self.current_step());
        self.current_step()
    }

    /// Discards the draft and returns to the first step.
    pub fn restart(&mut self) {
        debug!("wizard restarted from {}", self.current_step());
        self.position = WizardPosition::start();
        self.draft = PlanDraft::default();
    }
}

fn ensure_known(entries: &[CatalogEntry], field: &str, id: &str) -> Result<()> {
    if entries.iter().any(|e| e.id == id) {
        Ok(())
    } else {
        Err(WizardError::UnknownOption {
            field: field.to_string(),
            value: id.to_string(),
        })
    }
}
