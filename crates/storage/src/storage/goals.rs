use goalflow_core::{CoreError, Goal, GoalPatch, GoalStatus, NewGoal, new_id, now_millis, progress_percent};
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};

use super::{RowPolicy, Storage, collect_rows, get_conn, log_row_error, parse_column, subtasks};
use crate::error::StorageError;

const GOAL_COLUMNS: &str = "id, title, short_description, description, target_date, category, \
     priority, status, progress, icon, created_at, updated_at";

/// Outcome of a progress recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSync {
    pub progress: u8,
    /// `false` when the stored value already matched and nothing was written
    pub written: bool,
}

fn row_to_goal(row: &rusqlite::Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get(0)?,
        title: row.get(1)?,
        short_description: row.get(2)?,
        description: row.get(3)?,
        target_date: row.get(4)?,
        category: row.get(5)?,
        priority: parse_column(6, &row.get::<_, String>(6)?)?,
        status: parse_column(7, &row.get::<_, String>(7)?)?,
        progress: row.get(8)?,
        icon: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

pub(crate) fn insert_goal(conn: &Connection, goal: &Goal) -> Result<(), StorageError> {
    let mut stmt = conn.prepare_cached(&format!(
        "INSERT INTO goals ({GOAL_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
    ))?;
    stmt.execute(params![
        goal.id,
        goal.title,
        goal.short_description,
        goal.description,
        goal.target_date,
        goal.category,
        goal.priority.as_str(),
        goal.status.as_str(),
        goal.progress,
        goal.icon,
        goal.created_at,
        goal.updated_at,
    ])?;
    Ok(())
}

fn write_goal(conn: &Connection, goal: &Goal) -> Result<usize, StorageError> {
    Ok(conn.execute(
        "UPDATE goals SET title = ?2, short_description = ?3, description = ?4, target_date = ?5,
                category = ?6, priority = ?7, status = ?8, progress = ?9, icon = ?10, updated_at = ?11
         WHERE id = ?1",
        params![
            goal.id,
            goal.title,
            goal.short_description,
            goal.description,
            goal.target_date,
            goal.category,
            goal.priority.as_str(),
            goal.status.as_str(),
            goal.progress,
            goal.icon,
            goal.updated_at,
        ],
    )?)
}

pub(crate) fn fetch_goal(conn: &Connection, id: &str) -> Result<Option<Goal>, StorageError> {
    Ok(conn
        .query_row(&format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = ?1"), params![id], row_to_goal)
        .optional()?)
}

pub(crate) fn goal_exists(conn: &Connection, id: &str) -> Result<bool, StorageError> {
    Ok(conn
        .query_row("SELECT 1 FROM goals WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?
        .is_some())
}

pub(crate) fn fetch_all_goals(
    conn: &Connection,
    policy: RowPolicy,
) -> Result<Vec<Goal>, StorageError> {
    let mut stmt = conn.prepare(&format!("SELECT {GOAL_COLUMNS} FROM goals"))?;
    let rows = stmt.query_map([], row_to_goal)?;
    collect_rows(rows, policy)
}

impl Storage {
    /// Assigns id and timestamps, persists, and returns the full record.
    ///
    /// # Errors
    /// Returns error if validation or the insert fails.
    pub fn add_goal(&self, input: NewGoal) -> Result<Goal, StorageError> {
        input.validate()?;
        let goal = input.into_goal(new_id(), now_millis());
        let conn = get_conn(&self.pool)?;
        insert_goal(&conn, &goal)?;
        tracing::debug!(goal = %goal.id, "Goal added");
        Ok(goal)
    }

    /// All goals, unordered.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_goals(&self) -> Result<Vec<Goal>, StorageError> {
        let conn = get_conn(&self.pool)?;
        fetch_all_goals(&conn, RowPolicy::Skip)
    }

    /// Equality scan on the status index.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_goals_by_status(&self, status: GoalStatus) -> Result<Vec<Goal>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!("SELECT {GOAL_COLUMNS} FROM goals WHERE status = ?1"))?;
        let rows = stmt.query_map(params![status.as_str()], row_to_goal)?;
        Ok(rows.filter_map(log_row_error).collect())
    }

    /// # Errors
    /// Returns error if database query fails.
    pub fn get_goal(&self, id: &str) -> Result<Option<Goal>, StorageError> {
        let conn = get_conn(&self.pool)?;
        fetch_goal(&conn, id)
    }

    /// Merges `patch` into the goal and refreshes `updated_at`.
    ///
    /// Returns the number of rows affected: 0 when the goal does not exist.
    /// Progress may only be set directly on a goal without subtasks; otherwise
    /// it is derived from the checklist.
    ///
    /// # Errors
    /// Returns `Invalid` for a progress patch on a goal with subtasks, or
    /// error if validation or the update fails.
    pub fn update_goal(&self, id: &str, patch: GoalPatch) -> Result<usize, StorageError> {
        patch.validate()?;
        self.transaction(|tx| {
            let Some(mut goal) = fetch_goal(tx, id)? else {
                return Ok(0);
            };
            if let Some(progress) = patch.progress
                && !subtasks::fetch_subtasks_for_goal(tx, id)?.is_empty()
            {
                return Err(CoreError::InvalidValue {
                    field: "progress",
                    value: format!("{progress} (derived from subtasks)"),
                }
                .into());
            }
            patch.apply(&mut goal, now_millis());
            write_goal(tx, &goal)
        })
    }

    /// Deletes the goal with its subtasks and journal entries in one
    /// transaction. Returns whether the goal existed.
    ///
    /// # Errors
    /// Returns error if any delete fails; nothing is removed in that case.
    pub fn delete_goal(&self, id: &str) -> Result<bool, StorageError> {
        self.transaction(|tx| {
            let subtasks = tx.execute("DELETE FROM subtasks WHERE goal_id = ?1", params![id])?;
            let entries = tx.execute("DELETE FROM journal_entries WHERE goal_id = ?1", params![id])?;
            let affected = tx.execute("DELETE FROM goals WHERE id = ?1", params![id])?;
            tracing::debug!(goal = %id, subtasks, entries, "Goal deleted");
            Ok(affected > 0)
        })
    }

    /// Recomputes the goal's progress from its subtasks and writes it back
    /// only when it changed. `None` when the goal does not exist.
    ///
    /// # Errors
    /// Returns error if the read or write fails.
    pub fn recompute_goal_progress(
        &self,
        goal_id: &str,
    ) -> Result<Option<ProgressSync>, StorageError> {
        self.transaction(|tx| {
            let Some(mut goal) = fetch_goal(tx, goal_id)? else {
                return Ok(None);
            };
            let progress = progress_percent(&subtasks::fetch_subtasks_for_goal(tx, goal_id)?);
            if progress == goal.progress {
                return Ok(Some(ProgressSync { progress, written: false }));
            }
            GoalPatch::progress(progress).apply(&mut goal, now_millis());
            write_goal(tx, &goal)?;
            tracing::debug!(goal = %goal_id, progress, "Goal progress updated");
            Ok(Some(ProgressSync { progress, written: true }))
        })
    }
}
