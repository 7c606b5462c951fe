//! Parameter structures for submission history operations
//!
//! These structures carry no framework-specific derives so that any
//! interface (the CLI today) can wrap them with its own argument types and
//! convert with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│  SqliteGateway  │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Default number of plans returned by a history listing.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Generic parameters for operations requiring just an ID.
///
/// Used for showing and deleting submitted plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the submitted plan to operate on
    pub id: u64,
}

/// Parameters for listing submitted plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPlans {
    /// Maximum number of plans to return, newest first
    pub limit: u32,
}

impl Default for ListPlans {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Parameters for deleting a submitted plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// The ID of the plan to delete
    pub id: u64,
    /// Explicit confirmation, required to delete
    pub confirmed: bool,
}
