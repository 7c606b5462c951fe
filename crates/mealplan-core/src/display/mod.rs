//! Display formatting for wizard models and history listings.
//!
//! Domain models implement [`std::fmt::Display`] directly in [`models`];
//! collections and operation outcomes get newtype wrappers so the CLI can
//! print them without any formatting logic of its own. Everything renders as
//! markdown for the terminal renderer.
//!
//! - [`collections`]: [`SubmittedPlans`]
//! - [`results`]: [`SubmitResult`], [`DeleteResult`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: Display for [`WizardStep`](crate::models::WizardStep),
//!   [`SubmittedPlan`](crate::models::SubmittedPlan) and [`PlanView`]

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::SubmittedPlans;
pub use datetime::LocalDateTime;
pub use models::PlanView;
pub use results::{DeleteResult, SubmitResult};
