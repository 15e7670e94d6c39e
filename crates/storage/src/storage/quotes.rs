use goalflow_core::Quote;
use rusqlite::{Connection, OptionalExtension, params};

use super::{RowPolicy, Storage, collect_rows, get_conn};
use crate::error::StorageError;

const QUOTE_COLUMNS: &str = "id, text, author, created_at";

fn row_to_quote(row: &rusqlite::Row<'_>) -> rusqlite::Result<Quote> {
    Ok(Quote { id: row.get(0)?, text: row.get(1)?, author: row.get(2)?, created_at: row.get(3)? })
}

pub(crate) fn insert_quote(conn: &Connection, quote: &Quote) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("INSERT INTO quotes ({QUOTE_COLUMNS}) VALUES (?1, ?2, ?3, ?4)"))?;
    stmt.execute(params![quote.id, quote.text, quote.author, quote.created_at])?;
    Ok(())
}

/// Insertion order; seeded quotes share one timestamp.
pub(crate) fn fetch_all_quotes(
    conn: &Connection,
    policy: RowPolicy,
) -> Result<Vec<Quote>, StorageError> {
    let mut stmt = conn.prepare(&format!("SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY rowid"))?;
    let rows = stmt.query_map([], row_to_quote)?;
    collect_rows(rows, policy)
}

impl Storage {
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_quotes(&self) -> Result<Vec<Quote>, StorageError> {
        let conn = get_conn(&self.pool)?;
        fetch_all_quotes(&conn, RowPolicy::Skip)
    }

    /// # Errors
    /// Returns error if database query fails.
    pub fn get_quote(&self, id: &str) -> Result<Option<Quote>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn
            .query_row(
                &format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = ?1"),
                params![id],
                row_to_quote,
            )
            .optional()?)
    }
}
