use goalflow_core::{NewSubtask, Subtask, SubtaskPatch, new_id, now_millis};
use rusqlite::{Connection, OptionalExtension, params};

use super::{RowPolicy, Storage, collect_rows, get_conn, goals, log_row_error};
use crate::error::StorageError;

const SUBTASK_COLUMNS: &str = "id, goal_id, title, is_completed, target_date, created_at";

fn row_to_subtask(row: &rusqlite::Row<'_>) -> rusqlite::Result<Subtask> {
    Ok(Subtask {
        id: row.get(0)?,
        goal_id: row.get(1)?,
        title: row.get(2)?,
        is_completed: row.get(3)?,
        target_date: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub(crate) fn insert_subtask(conn: &Connection, subtask: &Subtask) -> Result<(), StorageError> {
    let mut stmt = conn.prepare_cached(&format!(
        "INSERT INTO subtasks ({SUBTASK_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
    ))?;
    stmt.execute(params![
        subtask.id,
        subtask.goal_id,
        subtask.title,
        subtask.is_completed,
        subtask.target_date,
        subtask.created_at,
    ])?;
    Ok(())
}

fn fetch_subtask(conn: &Connection, id: &str) -> Result<Option<Subtask>, StorageError> {
    Ok(conn
        .query_row(
            &format!("SELECT {SUBTASK_COLUMNS} FROM subtasks WHERE id = ?1"),
            params![id],
            row_to_subtask,
        )
        .optional()?)
}

pub(crate) fn fetch_subtasks_for_goal(
    conn: &Connection,
    goal_id: &str,
) -> Result<Vec<Subtask>, StorageError> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {SUBTASK_COLUMNS} FROM subtasks WHERE goal_id = ?1 ORDER BY created_at"
    ))?;
    let rows = stmt.query_map(params![goal_id], row_to_subtask)?;
    Ok(rows.filter_map(log_row_error).collect())
}

pub(crate) fn fetch_all_subtasks(
    conn: &Connection,
    policy: RowPolicy,
) -> Result<Vec<Subtask>, StorageError> {
    let mut stmt = conn.prepare(&format!("SELECT {SUBTASK_COLUMNS} FROM subtasks"))?;
    let rows = stmt.query_map([], row_to_subtask)?;
    collect_rows(rows, policy)
}

impl Storage {
    /// Creates a subtask under an existing goal.
    ///
    /// # Errors
    /// Returns `NotFound` if the goal does not exist, or error if the insert fails.
    pub fn add_subtask(&self, input: NewSubtask) -> Result<Subtask, StorageError> {
        input.validate()?;
        self.transaction(|tx| {
            if !goals::goal_exists(tx, &input.goal_id)? {
                return Err(StorageError::not_found("goal", &input.goal_id));
            }
            let subtask = input.into_subtask(new_id(), now_millis());
            insert_subtask(tx, &subtask)?;
            Ok(subtask)
        })
    }

    /// # Errors
    /// Returns error if database query fails.
    pub fn get_subtask(&self, id: &str) -> Result<Option<Subtask>, StorageError> {
        let conn = get_conn(&self.pool)?;
        fetch_subtask(&conn, id)
    }

    /// Equality scan on the `goal_id` index, oldest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_subtasks_for_goal(&self, goal_id: &str) -> Result<Vec<Subtask>, StorageError> {
        let conn = get_conn(&self.pool)?;
        fetch_subtasks_for_goal(&conn, goal_id)
    }

    /// Partial merge. Returns rows affected: 0 when the subtask does not exist.
    ///
    /// # Errors
    /// Returns error if validation or the update fails.
    pub fn update_subtask(&self, id: &str, patch: SubtaskPatch) -> Result<usize, StorageError> {
        patch.validate()?;
        self.transaction(|tx| {
            let Some(mut subtask) = fetch_subtask(tx, id)? else {
                return Ok(0);
            };
            patch.apply(&mut subtask);
            Ok(tx.execute(
                "UPDATE subtasks SET title = ?2, is_completed = ?3, target_date = ?4 WHERE id = ?1",
                params![subtask.id, subtask.title, subtask.is_completed, subtask.target_date],
            )?)
        })
    }

    /// Returns rows affected: 0 when the subtask does not exist.
    ///
    /// # Errors
    /// Returns error if database delete fails.
    pub fn delete_subtask(&self, id: &str) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.execute("DELETE FROM subtasks WHERE id = ?1", params![id])?)
    }
}
