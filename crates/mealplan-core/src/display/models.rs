//! Display implementations for the wizard models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    catalog::Catalog,
    models::{SubmittedPlan, WizardStep},
};

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SubmittedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Plan {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Days**: {}", self.selected_days.join(", "))?;
        writeln!(f, "- **Location**: {}", self.delivery_location)?;
        writeln!(f, "- **Time slot**: {}", self.delivery_time_slot)?;
        writeln!(f, "- **Submitted**: {}", LocalDateTime(&self.submitted_at))?;
        writeln!(f)
    }
}

/// A submitted plan rendered with catalog labels instead of identifiers.
pub struct PlanView<'a> {
    pub plan: &'a SubmittedPlan,
    pub catalog: &'a Catalog,
}

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        writeln!(f, "## Plan {}", plan.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Days**: {}",
            self.catalog.weekday_labels(&plan.selected_days).join(", ")
        )?;
        writeln!(
            f,
            "- **Location**: {}",
            self.catalog.location_label(&plan.delivery_location)
        )?;
        writeln!(
            f,
            "- **Time slot**: {}",
            self.catalog.time_slot_label(&plan.delivery_time_slot)
        )?;
        writeln!(f, "- **Submitted**: {}", LocalDateTime(&plan.submitted_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (heading, entries) in [
            ("Weekdays", &self.weekdays),
            ("Locations", &self.locations),
            ("Time slots", &self.time_slots),
        ] {
            writeln!(f, "## {heading}")?;
            writeln!(f)?;
            for entry in entries {
                if entry.id == entry.label {
                    writeln!(f, "- {}", entry.label)?;
                } else {
                    writeln!(f, "- {} (`{}`)", entry.label, entry.id)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
