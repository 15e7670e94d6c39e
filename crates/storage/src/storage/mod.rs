//! `SQLite` record store.
//!
//! All methods are synchronous; the async facades in `sqlite_async` move them
//! onto the blocking pool. Each table lives in its own submodule, and every
//! submodule exposes connection-level helpers so that multi-table operations
//! (cascading deletes, idea conversion, import) run inside one transaction.

mod archive;
mod goals;
mod ideas;
mod journal;
mod quotes;
mod subtasks;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use goalflow_core::env_config::db_pool_size;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::migrations;

pub use goals::ProgressSync;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Explicit store handle. Clones share one connection pool.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Parse a TEXT column through `FromStr`, reporting failures as conversion errors
pub(crate) fn parse_column<T>(idx: usize, value: &str) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().map_err(|e: T::Err| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

/// How a multi-row read treats rows that fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowPolicy {
    /// Log and drop the row. List views keep working past a bad row.
    Skip,
    /// Fail the read. Export must not lose rows it cannot decode.
    Strict,
}

pub(crate) fn collect_rows<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
    policy: RowPolicy,
) -> Result<Vec<T>, StorageError> {
    match policy {
        RowPolicy::Skip => Ok(rows.filter_map(log_row_error).collect()),
        RowPolicy::Strict => Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?),
    }
}

/// Concurrency settings applied to every pooled connection
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

/// Tables managed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Goals,
    Subtasks,
    Ideas,
    Quotes,
    JournalEntries,
}

impl Table {
    pub const ALL: [Self; 5] =
        [Self::Goals, Self::Subtasks, Self::Ideas, Self::Quotes, Self::JournalEntries];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Goals => "goals",
            Self::Subtasks => "subtasks",
            Self::Ideas => "ideas",
            Self::Quotes => "quotes",
            Self::JournalEntries => "journal_entries",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row counts per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub goals: u64,
    pub subtasks: u64,
    pub ideas: u64,
    pub quotes: u64,
    pub journal_entries: u64,
    pub schema_version: i32,
}

pub(crate) fn clear_table(conn: &Connection, table: Table) -> Result<usize, StorageError> {
    Ok(conn.execute(&format!("DELETE FROM {table}"), [])?)
}

pub(crate) fn count_rows(conn: &Connection, table: Table) -> Result<u64, StorageError> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?;
    Ok(u64::try_from(count).unwrap_or_default())
}

impl Storage {
    /// Opens (creating if needed) the database at `db_path` and migrates it
    /// to the current schema.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or a migration fails.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        // Run migrations on first connection
        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(path = %db_path.display(), pool_size, "Storage opened");

        Ok(Self { pool })
    }

    /// Releases this handle's share of the pool. Connections close once the
    /// last clone is gone.
    pub fn close(self) {
        drop(self.pool);
        tracing::debug!("Storage handle closed");
    }

    /// Runs `f` inside one `BEGIN IMMEDIATE` transaction: everything commits
    /// or nothing does. Overlapping writers serialize on the write lock.
    ///
    /// # Errors
    /// Propagates the first error from `f` after rolling back.
    pub fn transaction<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
    {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    /// Current `user_version` of the open database.
    ///
    /// # Errors
    /// Returns error if the pragma cannot be read.
    pub fn schema_version(&self) -> Result<i32, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
    }

    /// Deletes every row of `table`. Returns the number of rows removed.
    ///
    /// # Errors
    /// Returns error if the delete fails.
    pub fn clear(&self, table: Table) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        clear_table(&conn, table)
    }

    /// # Errors
    /// Returns error if the count query fails.
    pub fn count(&self, table: Table) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        count_rows(&conn, table)
    }

    /// # Errors
    /// Returns error if a count query fails.
    pub fn stats(&self) -> Result<StorageStats, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(StorageStats {
            goals: count_rows(&conn, Table::Goals)?,
            subtasks: count_rows(&conn, Table::Subtasks)?,
            ideas: count_rows(&conn, Table::Ideas)?,
            quotes: count_rows(&conn, Table::Quotes)?,
            journal_entries: count_rows(&conn, Table::JournalEntries)?,
            schema_version: conn.pragma_query_value(None, "user_version", |row| row.get(0))?,
        })
    }
}
