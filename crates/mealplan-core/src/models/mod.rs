//! Data models for the planning wizard.
//!
//! These types carry no behavior beyond small accessors; transitions live in
//! [`crate::wizard`] and Display implementations in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use mealplan_core::{
//!     models::{PlanDraft, WizardStep},
//!     Catalog,
//! };
//!
//! let draft = PlanDraft::default();
//! assert!(draft.completed(&Catalog::default()).is_none());
//! assert_eq!(WizardStep::from_index(4), Some(WizardStep::Confirmation));
//! ```

pub mod draft;
pub mod result;
pub mod step;
pub mod submission;


pub use draft::{CompletedPlan, PlanDraft};
pub use result::StepResult;
pub use step::{WizardPosition, WizardStep};
pub use submission::SubmittedPlan;
