//! Runtime settings read from `GOALFLOW_*` environment variables.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{DEFAULT_DB_POOL_SIZE, DEFAULT_DUE_SOON_DAYS};

/// Overrides the database file location.
pub const DB_PATH_VAR: &str = "GOALFLOW_DB_PATH";
/// `SQLite` connection pool size.
pub const DB_POOL_SIZE_VAR: &str = "GOALFLOW_DB_POOL_SIZE";
/// Window in days for the "due soon" deadline state.
pub const DUE_SOON_DAYS_VAR: &str = "GOALFLOW_DUE_SOON_DAYS";

/// Value of `var` parsed as `T`. Unset means `default`; a value that does not
/// parse is logged and also falls back to `default`.
fn parse_setting<T>(var: &str, default: T) -> T
where
    T: FromStr + Display,
{
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(var, value = %raw, %default, "ignoring unparsable setting");
        default
    })
}

/// Database file: `$GOALFLOW_DB_PATH`, else `<local data dir>/goalflow/goalflow.db`.
#[must_use]
pub fn db_path() -> PathBuf {
    match std::env::var_os(DB_PATH_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("goalflow")
            .join("goalflow.db"),
    }
}

#[must_use]
pub fn db_pool_size() -> u32 {
    parse_setting(DB_POOL_SIZE_VAR, DEFAULT_DB_POOL_SIZE).max(1)
}

#[must_use]
pub fn due_soon_days() -> i64 {
    parse_setting(DUE_SOON_DAYS_VAR, DEFAULT_DUE_SOON_DAYS)
}
