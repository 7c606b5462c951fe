//! Plans accepted by a submission gateway.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A completed plan as recorded by a gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmittedPlan {
    /// Identifier assigned by the gateway
    pub id: u64,

    /// Weekday identifiers
    pub selected_days: Vec<String>,

    /// Location identifier
    pub delivery_location: String,

    /// Time slot identifier
    pub delivery_time_slot: String,

    /// When the gateway accepted the plan (UTC)
    pub submitted_at: Timestamp,
}
