//! Decision CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension, Statement};

use crate::{
    error::{DatabaseResultExt, Result, WaypointError},
    models::{Decision, DecisionFilter, Plan},
};

const INSERT_DECISION_SQL: &str =
    "INSERT INTO decisions (task_description, created_at) VALUES (?1, ?2)";
const INSERT_STEP_SQL: &str =
    "INSERT INTO decision_steps (decision_id, position, text) VALUES (?1, ?2, ?3)";
const SELECT_DECISION_SQL: &str =
    "SELECT id, task_description, created_at FROM decisions WHERE id = ?1";
const SELECT_STEPS_SQL: &str =
    "SELECT text FROM decision_steps WHERE decision_id = ?1 ORDER BY position";
const DELETE_DECISION_SQL: &str = "DELETE FROM decisions WHERE id = ?1";

// `LIMIT -1` means no limit in SQLite
const LIST_DECISIONS_SQL: &str = "SELECT id, task_description, created_at FROM decisions \
     WHERE ?1 IS NULL OR task_description LIKE ?1 ESCAPE '\\' \
     ORDER BY created_at DESC, id DESC LIMIT ?2";

/// A decision row before its steps are attached.
struct DecisionRow {
    id: u64,
    task_description: String,
    created_at: Timestamp,
}

impl super::Database {
    fn build_decision_row(row: &rusqlite::Row) -> rusqlite::Result<DecisionRow> {
        let micros: i64 = row.get(2)?;
        let created_at = Timestamp::from_microsecond(micros)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Integer, Box::new(e)))?;

        Ok(DecisionRow {
            id: row.get::<_, i64>(0)? as u64,
            task_description: row.get(1)?,
            created_at,
        })
    }

    fn attach_steps(steps_stmt: &mut Statement<'_>, row: DecisionRow) -> Result<Decision> {
        let plan_steps = steps_stmt
            .query_map(params![row.id as i64], |r| r.get::<_, String>(0))
            .db_context("Failed to query decision steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read decision steps")?;

        Ok(Decision {
            id: row.id,
            task_description: row.task_description,
            plan_steps,
            created_at: row.created_at,
        })
    }

    /// Stores a new decision for `task_description` with the given plan,
    /// stamped with the current time.
    pub fn create_decision(&mut self, task_description: &str, plan: &Plan) -> Result<Decision> {
        self.create_decision_at(task_description, plan, Timestamp::now())
    }

    /// Stores a new decision with an explicit creation time.
    ///
    /// The decision row and all of its steps are written in one
    /// transaction, so a failure never leaves a decision without steps.
    pub fn create_decision_at(
        &mut self,
        task_description: &str,
        plan: &Plan,
        created_at: Timestamp,
    ) -> Result<Decision> {
        if task_description.trim().is_empty() {
            return Err(WaypointError::invalid_input("task_description")
                .with_reason("Task description cannot be empty"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_DECISION_SQL,
            params![task_description, created_at.as_microsecond()],
        )
        .db_context("Failed to insert decision")?;

        let id = tx.last_insert_rowid();

        {
            let mut stmt = tx
                .prepare(INSERT_STEP_SQL)
                .db_context("Failed to prepare step insert")?;
            for (position, text) in plan.steps().iter().enumerate() {
                stmt.execute(params![id, position as i64, text])
                    .db_context("Failed to insert decision step")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Stored decision {id} with {} steps", plan.len());

        Ok(Decision {
            id: id as u64,
            task_description: task_description.to_string(),
            plan_steps: plan.steps().to_vec(),
            created_at,
        })
    }

    /// Retrieves a decision by its ID.
    ///
    /// IDs beyond the SQLite rowid range cannot exist and yield `None`.
    pub fn get_decision(&self, id: u64) -> Result<Option<Decision>> {
        let Some(rowid) = rowid(id) else {
            return Ok(None);
        };

        let row = self
            .connection
            .query_row(SELECT_DECISION_SQL, params![rowid], Self::build_decision_row)
            .optional()
            .db_context("Failed to query decision")?;

        match row {
            Some(row) => {
                let mut steps_stmt = self
                    .connection
                    .prepare(SELECT_STEPS_SQL)
                    .db_context("Failed to prepare steps query")?;
                Self::attach_steps(&mut steps_stmt, row).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Lists decisions, most recent first, optionally filtered.
    ///
    /// Ties on `created_at` fall back to the higher ID first, which is the
    /// later insert.
    pub fn list_decisions(&self, filter: Option<&DecisionFilter>) -> Result<Vec<Decision>> {
        let pattern = filter
            .and_then(|f| f.task_contains.as_deref())
            .map(|text| format!("%{}%", escape_like(text)));
        let limit = filter
            .and_then(|f| f.limit)
            .map_or(-1, |limit| i64::try_from(limit).unwrap_or(i64::MAX));

        let mut stmt = self
            .connection
            .prepare(LIST_DECISIONS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![pattern, limit], Self::build_decision_row)
            .db_context("Failed to query decisions")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read decisions")?;

        let mut steps_stmt = self
            .connection
            .prepare(SELECT_STEPS_SQL)
            .db_context("Failed to prepare steps query")?;

        rows.into_iter()
            .map(|row| Self::attach_steps(&mut steps_stmt, row))
            .collect()
    }

    /// Lists every decision, most recent first.
    pub fn list_all_decisions(&self) -> Result<Vec<Decision>> {
        self.list_decisions(None)
    }

    /// Deletes a decision and its steps.
    ///
    /// Returns `true` when a decision was removed. Deleting an unknown ID is
    /// not an error and returns `false`, as does an ID beyond the rowid
    /// range.
    pub fn delete_decision(&mut self, id: u64) -> Result<bool> {
        let Some(rowid) = rowid(id) else {
            debug!("Delete of decision {id} skipped: outside the rowid range");
            return Ok(false);
        };

        let removed = self
            .connection
            .execute(DELETE_DECISION_SQL, params![rowid])
            .db_context("Failed to delete decision")?;

        debug!("Delete of decision {id} removed {removed} row(s)");
        Ok(removed > 0)
    }
}

/// Converts a decision ID to a SQLite rowid, or `None` if it cannot be one.
fn rowid(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

/// Escapes LIKE wildcards so user text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
