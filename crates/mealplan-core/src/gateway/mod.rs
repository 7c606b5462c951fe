//! Plan submission gateways.
//!
//! The wizard hands its completed plan to a [`PlanSubmissionGateway`] exactly
//! once, from the confirmation step. Transport, retries and storage are the
//! gateway's business; the wizard only needs success or failure back.
//!
//! Two adapters ship with the crate:
//!
//! - [`SqliteGateway`]: appends plans to a local SQLite log and can list them
//!   again. Built with [`GatewayBuilder`].
//! - [`MemoryGateway`]: keeps plans in process, with an optional forced
//!   failure for dry runs and tests.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{CompletedPlan, SubmittedPlan},
};

pub mod builder;
pub mod memory;
pub mod sqlite;

pub use builder::GatewayBuilder;
pub use memory::MemoryGateway;
pub use sqlite::SqliteGateway;

/// Receives finished plans.
#[async_trait]
pub trait PlanSubmissionGateway: Send + Sync {
    /// Accepts a completed plan, returning it as recorded.
    async fn submit(&self, plan: &CompletedPlan) -> Result<SubmittedPlan>;
}
