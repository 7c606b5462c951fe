//! Submitted plan inserts and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{CompletedPlan, SubmittedPlan},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO submitted_plans (selected_days, delivery_location, delivery_time_slot, submitted_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_PLAN_SQL: &str = "SELECT id, selected_days, delivery_location, delivery_time_slot, submitted_at FROM submitted_plans WHERE id = ?1";
const LIST_PLANS_SQL: &str = "SELECT id, selected_days, delivery_location, delivery_time_slot, submitted_at FROM submitted_plans ORDER BY id DESC LIMIT ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM submitted_plans WHERE id = ?1";

impl super::Database {
    /// Records a completed plan and returns it with its assigned ID.
    pub fn insert_plan(&mut self, plan: &CompletedPlan) -> Result<SubmittedPlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let selected_days = plan.selected_days.clone();
        let days_json = serde_json::to_string(&selected_days)?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                days_json,
                plan.delivery_location,
                plan.delivery_time_slot,
                now.to_string()
            ],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(SubmittedPlan {
            id,
            selected_days,
            delivery_location: plan.delivery_location.clone(),
            delivery_time_slot: plan.delivery_time_slot.clone(),
            submitted_at: now,
        })
    }

    /// Retrieves a submitted plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<SubmittedPlan>> {
        let Some(rowid) = rowid(id) else {
            return Ok(None);
        };
        self.connection
            .query_row(SELECT_PLAN_SQL, params![rowid], plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Lists the most recent submitted plans, newest first.
    pub fn list_plans(&self, limit: u32) -> Result<Vec<SubmittedPlan>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let plans = stmt
            .query_map(params![limit], plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read plan row")?;

        Ok(plans)
    }

    /// Deletes a submitted plan. Returns false if no such plan exists.
    pub fn delete_plan(&mut self, id: u64) -> Result<bool> {
        let Some(rowid) = rowid(id) else {
            return Ok(false);
        };
        let affected = self
            .connection
            .execute(DELETE_PLAN_SQL, params![rowid])
            .db_context("Failed to delete plan")?;
        Ok(affected > 0)
    }
}

/// SQLite rowids are signed; IDs beyond `i64::MAX` cannot name a row.
fn rowid(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<SubmittedPlan> {
    let days_json: String = row.get(1)?;
    let selected_days: Vec<String> = serde_json::from_str(&days_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(SubmittedPlan {
        id: row.get::<_, i64>(0)? as u64,
        selected_days,
        delivery_location: row.get(2)?,
        delivery_time_slot: row.get(3)?,
        submitted_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?,
    })
}
