//! Core library for the meal plan wizard.
//!
//! The wizard walks a user through five screens (delivery days, a short
//! motivation screen, location, time window, confirmation) and produces a
//! completed plan that is handed to a submission gateway.
//!
//! # Layers
//!
//! - [`wizard`]: the step transition controller ([`Wizard`]), owning the
//!   position and the accumulated [`PlanDraft`]
//! - [`widgets`]: one input widget per step, gating submit and back
//! - [`timer`]: the cancellable delay behind the "submitting" state
//! - [`session`]: glue that owns a wizard and its mounted widget and applies
//!   user inputs ([`WizardSession`])
//! - [`gateway`]: where completed plans go ([`PlanSubmissionGateway`])
//! - [`catalog`]: the option lists, injected as configuration
//! - [`display`]: markdown rendering for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use std::{sync::Arc, time::Duration};
//!
//! use mealplan_core::{
//!     Catalog, MemoryGateway, SessionUpdate, Wizard, WizardInput, WizardSession,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = Arc::new(MemoryGateway::new());
//! let mut session = WizardSession::new(
//!     Wizard::new(Catalog::default()),
//!     gateway.clone(),
//!     Duration::ZERO,
//! );
//!
//! for input in ["Mardi", "next", "next", "Epitech", "next", "2", "next", "next"] {
//!     if session.apply(mealplan_core::parse_input(input))? == SessionUpdate::Pending {
//!         session.settle().await?;
//!     }
//! }
//! assert_eq!(gateway.plans().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod params;
pub mod session;
pub mod timer;
pub mod widgets;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry};
pub use display::{DeleteResult, PlanView, SubmitResult, SubmittedPlans};
pub use error::{Result, WizardError};
pub use gateway::{GatewayBuilder, MemoryGateway, PlanSubmissionGateway, SqliteGateway};
pub use models::{
    CompletedPlan, PlanDraft, StepResult, SubmittedPlan, WizardPosition, WizardStep,
};
pub use params::{DeletePlan, Id, ListPlans};
pub use session::{parse_input, SessionUpdate, WizardInput, WizardSession, DEFAULT_SUBMIT_DELAY};
pub use timer::DeferredSubmit;
pub use widgets::StepWidget;
pub use wizard::Wizard;
