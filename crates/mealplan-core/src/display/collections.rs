//! Collection wrapper types for displaying groups of submitted plans.

use std::{fmt, ops::Index};

use super::models::PlanView;
use crate::{catalog::Catalog, models::SubmittedPlan};

/// Newtype wrapper for displaying a history of submitted plans.
///
/// # Examples
///
/// ```rust
/// use mealplan_core::display::SubmittedPlans;
///
/// let plans = SubmittedPlans(vec![]);
/// assert_eq!(plans.to_string(), "No plans found.\n");
/// ```
pub struct SubmittedPlans(pub Vec<SubmittedPlan>);

impl SubmittedPlans {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubmittedPlan> {
        self.0.iter()
    }

    /// Display adapter that shows catalog labels for each plan.
    pub fn with_catalog<'a>(&'a self, catalog: &'a Catalog) -> LabelledPlans<'a> {
        LabelledPlans {
            plans: self,
            catalog,
        }
    }
}

impl Index<usize> for SubmittedPlans {
    type Output = SubmittedPlan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a SubmittedPlans {
    type Item = &'a SubmittedPlan;
    type IntoIter = std::slice::Iter<'a, SubmittedPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SubmittedPlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in &self.0 {
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}

/// [`SubmittedPlans`] rendered through a [`Catalog`].
pub struct LabelledPlans<'a> {
    plans: &'a SubmittedPlans,
    catalog: &'a Catalog,
}

impl fmt::Display for LabelledPlans<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plans.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in self.plans {
            write!(
                f,
                "{}",
                PlanView {
                    plan,
                    catalog: self.catalog
                }
            )?;
        }
        Ok(())
    }
}
