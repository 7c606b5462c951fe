//! The partially filled plan accumulated across wizard steps.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Plan being built by the wizard.
///
/// A field is only ever populated by the submit of the step that owns it;
/// fields of unvisited steps stay at their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDraft {
    /// Weekday identifiers chosen on the first step
    pub selected_days: BTreeSet<String>,

    /// Whether the motivation screen was passed
    pub motivation_acknowledged: bool,

    /// Location identifier
    pub delivery_location: Option<String>,

    /// Time slot identifier
    pub delivery_time_slot: Option<String>,
}

impl PlanDraft {
    /// Returns the submission payload once every required field is set.
    ///
    /// Days are listed in the order of `catalog`'s weekdays.
    pub fn completed(&self, catalog: &Catalog) -> Option<CompletedPlan> {
        if self.selected_days.is_empty() {
            return None;
        }
        Some(CompletedPlan {
            selected_days: catalog.weekday_order(&self.selected_days),
            delivery_location: self.delivery_location.clone()?,
            delivery_time_slot: self.delivery_time_slot.clone()?,
        })
    }
}

/// Fully populated plan handed to a submission gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedPlan {
    /// Weekday identifiers in catalog order
    pub selected_days: Vec<String>,
    pub delivery_location: String,
    pub delivery_time_slot: String,
}
