use goalflow_core::{JournalEntry, NewJournalEntry, new_id, now_millis};
use rusqlite::{Connection, params};

use super::{RowPolicy, Storage, collect_rows, get_conn, goals, log_row_error};
use crate::error::StorageError;

const JOURNAL_COLUMNS: &str = "id, goal_id, content, created_at, updated_at";

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<JournalEntry> {
    Ok(JournalEntry {
        id: row.get(0)?,
        goal_id: row.get(1)?,
        content: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

pub(crate) fn insert_entry(conn: &Connection, entry: &JournalEntry) -> Result<(), StorageError> {
    let mut stmt = conn.prepare_cached(&format!(
        "INSERT INTO journal_entries ({JOURNAL_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5)"
    ))?;
    stmt.execute(params![entry.id, entry.goal_id, entry.content, entry.created_at, entry.updated_at])?;
    Ok(())
}

pub(crate) fn fetch_all_entries(
    conn: &Connection,
    policy: RowPolicy,
) -> Result<Vec<JournalEntry>, StorageError> {
    let mut stmt = conn.prepare(&format!("SELECT {JOURNAL_COLUMNS} FROM journal_entries"))?;
    let rows = stmt.query_map([], row_to_entry)?;
    collect_rows(rows, policy)
}

impl Storage {
    /// # Errors
    /// Returns `NotFound` if the goal does not exist, or error if the insert fails.
    pub fn add_journal_entry(&self, input: NewJournalEntry) -> Result<JournalEntry, StorageError> {
        input.validate()?;
        self.transaction(|tx| {
            if !goals::goal_exists(tx, &input.goal_id)? {
                return Err(StorageError::not_found("goal", &input.goal_id));
            }
            let entry = input.into_entry(new_id(), now_millis());
            insert_entry(tx, &entry)?;
            Ok(entry)
        })
    }

    /// Entries for one goal, newest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_journal_entries(&self, goal_id: &str) -> Result<Vec<JournalEntry>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {JOURNAL_COLUMNS} FROM journal_entries WHERE goal_id = ?1
             ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt.query_map(params![goal_id], row_to_entry)?;
        Ok(rows.filter_map(log_row_error).collect())
    }

    /// Replaces the content and refreshes `updated_at`. Returns rows affected.
    ///
    /// # Errors
    /// Returns error if the content is blank or the update fails.
    pub fn update_journal_entry(&self, id: &str, content: &str) -> Result<usize, StorageError> {
        if content.trim().is_empty() {
            return Err(goalflow_core::CoreError::MissingField("content").into());
        }
        let conn = get_conn(&self.pool)?;
        Ok(conn.execute(
            "UPDATE journal_entries SET content = ?2, updated_at = ?3 WHERE id = ?1",
            params![id, content, now_millis()],
        )?)
    }

    /// # Errors
    /// Returns error if database delete fails.
    pub fn delete_journal_entry(&self, id: &str) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.execute("DELETE FROM journal_entries WHERE id = ?1", params![id])?)
    }
}
