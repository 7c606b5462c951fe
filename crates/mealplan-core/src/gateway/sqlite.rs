//! Gateway that records plans in a local SQLite database.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::info;
use tokio::task;

use super::PlanSubmissionGateway;
use crate::{
    db::Database,
    display::SubmittedPlans,
    error::{Result, WizardError},
    models::{CompletedPlan, SubmittedPlan},
    params::{DeletePlan, Id, ListPlans},
};

/// Local submission log. Each operation opens its own connection on the
/// blocking pool.
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    db_path: PathBuf,
}

impl SqliteGateway {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking pool.
    async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(WizardError::join)?
    }

    /// Lists recently submitted plans, newest first.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<SubmittedPlans> {
        let limit = params.limit;
        let plans = self.with_db(move |db| db.list_plans(limit)).await?;
        Ok(SubmittedPlans(plans))
    }

    /// Retrieves a submitted plan by ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<SubmittedPlan>> {
        let id = params.id;
        self.with_db(move |db| db.get_plan(id)).await
    }

    /// Permanently deletes a submitted plan, returning it for confirmation.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` if `confirmed` is false and
    /// `WizardError::PlanNotFound` if no plan has this ID.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<SubmittedPlan> {
        if !params.confirmed {
            return Err(WizardError::invalid_input("confirmed").with_reason(
                "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed.",
            ));
        }
        let id = params.id;
        self.with_db(move |db| {
            let plan = db.get_plan(id)?.ok_or(WizardError::PlanNotFound { id })?;
            db.delete_plan(id)?;
            Ok(plan)
        })
        .await
    }
}

#[async_trait]
impl PlanSubmissionGateway for SqliteGateway {
    async fn submit(&self, plan: &CompletedPlan) -> Result<SubmittedPlan> {
        let plan = plan.clone();
        let stored = self.with_db(move |db| db.insert_plan(&plan)).await?;
        info!("recorded plan {} in {}", stored.id, self.db_path.display());
        Ok(stored)
    }
}
