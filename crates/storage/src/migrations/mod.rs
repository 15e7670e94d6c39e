#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod column_helpers;
mod v1;
mod v2;
mod v3;
mod v4;

use column_helpers::add_column_if_not_exists;
use goalflow_core::{SEED_QUOTES, new_id, now_millis};
use rusqlite::{Connection, Transaction, TransactionBehavior, params};

use crate::error::StorageError;

pub const SCHEMA_VERSION: i32 = 4;

/// Brings the database up to [`SCHEMA_VERSION`], one committed step per version.
///
/// Each step bumps `user_version` inside its own transaction, so an
/// interrupted upgrade resumes at the first step that did not commit, and
/// concurrent openers of one fresh file apply (and seed) each step once.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version > SCHEMA_VERSION {
        return Err(StorageError::Migration(format!(
            "database schema v{current_version} is newer than supported v{SCHEMA_VERSION}"
        )));
    }

    if current_version < 1i32 {
        step(conn, 1, "goals and subtasks", |c| c.execute_batch(v1::SQL))?;
    }

    if current_version < 2i32 {
        step(conn, 2, "short_description/icon columns on goals", |c| {
            add_column_if_not_exists(c, "goals", v2::SHORT_DESCRIPTION, v2::TEXT_EMPTY_DEF)?;
            add_column_if_not_exists(c, "goals", v2::ICON, v2::TEXT_EMPTY_DEF)
        })?;
    }

    if current_version < 3i32 {
        step(conn, 3, "ideas and quotes", |c| {
            c.execute_batch(v3::SQL)?;
            seed_quotes(c)
        })?;
    }

    if current_version < 4i32 {
        step(conn, 4, "idea effort/impact, journal entries", |c| {
            add_column_if_not_exists(c, "ideas", v4::EFFORT, v2::TEXT_EMPTY_DEF)?;
            add_column_if_not_exists(c, "ideas", v4::IMPACT, v2::TEXT_EMPTY_DEF)?;
            c.execute_batch(v4::SQL)
        })?;
    }

    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}

/// Applies one version under `BEGIN IMMEDIATE`. `user_version` is re-read
/// once the write lock is held, so when several openers race on one file
/// only the first to get the lock runs the step.
fn step<F>(conn: &Connection, version: i32, label: &str, apply: F) -> Result<(), rusqlite::Error>
where
    F: FnOnce(&Connection) -> Result<(), rusqlite::Error>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let applied: i32 = tx.pragma_query_value(None, "user_version", |row| row.get(0))?;
    if applied >= version {
        tracing::debug!("Migration v{} already applied (schema at v{})", version, applied);
        return Ok(());
    }

    tracing::info!("Running migration v{}: {}", version, label);
    apply(&tx)?;
    tx.pragma_update(None, "user_version", version)?;
    tx.commit()
}

/// Runs only as part of the step that creates the quote table, so reopening
/// an existing database never reseeds.
fn seed_quotes(conn: &Connection) -> Result<(), rusqlite::Error> {
    let now = now_millis();
    let mut stmt =
        conn.prepare("INSERT INTO quotes (id, text, author, created_at) VALUES (?1, ?2, ?3, ?4)")?;
    for (text, author) in SEED_QUOTES {
        stmt.execute(params![new_id(), text, author, now])?;
    }
    tracing::info!(count = SEED_QUOTES.len(), "Seeded quote table");
    Ok(())
}
