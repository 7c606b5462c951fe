//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::models::PlanView;
use crate::{catalog::Catalog, models::SubmittedPlan};

/// Outcome of a successful wizard submission.
pub struct SubmitResult<'a> {
    pub plan: &'a SubmittedPlan,
    pub catalog: &'a Catalog,
}

impl fmt::Display for SubmitResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Submitted plan with ID: {}", self.plan.id)?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            PlanView {
                plan: self.plan,
                catalog: self.catalog
            }
        )
    }
}

/// Outcome of deleting a plan from the history.
pub struct DeleteResult<'a> {
    pub plan: SubmittedPlan,
    pub catalog: &'a Catalog,
}

impl<'a> DeleteResult<'a> {
    pub fn new(plan: SubmittedPlan, catalog: &'a Catalog) -> Self {
        Self { plan, catalog }
    }
}

impl fmt::Display for DeleteResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted plan with ID: {}", self.plan.id)?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            PlanView {
                plan: &self.plan,
                catalog: self.catalog
            }
        )
    }
}
