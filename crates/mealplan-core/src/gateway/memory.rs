//! In-process gateway.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use jiff::Timestamp;

use super::PlanSubmissionGateway;
use crate::{
    error::{Result, WizardError},
    models::{CompletedPlan, SubmittedPlan},
};

/// Keeps accepted plans in memory. Can be told to fail, to exercise the
/// wizard's retry path.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    plans: Mutex<Vec<SubmittedPlan>>,
    failing: AtomicBool,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent submissions fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Plans accepted so far.
    pub fn plans(&self) -> Vec<SubmittedPlan> {
        self.plans.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PlanSubmissionGateway for MemoryGateway {
    async fn submit(&self, plan: &CompletedPlan) -> Result<SubmittedPlan> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(WizardError::gateway("gateway unavailable"));
        }
        let mut plans = self
            .plans
            .lock()
            .map_err(|_| WizardError::gateway("gateway state poisoned"))?;
        let stored = SubmittedPlan {
            id: plans.len() as u64 + 1,
            selected_days: plan.selected_days.clone(),
            delivery_location: plan.delivery_location.clone(),
            delivery_time_slot: plan.delivery_time_slot.clone(),
            submitted_at: Timestamp::now(),
        };
        plans.push(stored.clone());
        Ok(stored)
    }
}
