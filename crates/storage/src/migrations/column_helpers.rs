//! Idempotent column additions for tables that predate a migration.

use rusqlite::{Connection, OptionalExtension, params};

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool, rusqlite::Error> {
    conn.query_row(
        "SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2",
        params![table, column],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
}

/// `ALTER TABLE .. ADD COLUMN` unless `table` already carries `column`.
/// Databases created after the column joined the base schema skip the alter.
pub fn add_column_if_not_exists(
    conn: &Connection,
    table: &str,
    column: &str,
    definition: &str,
) -> Result<(), rusqlite::Error> {
    if has_column(conn, table, column)? {
        tracing::debug!(table, column, "Column already present");
        return Ok(());
    }
    conn.execute_batch(&format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_twice_leaves_one_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE ideas (id TEXT PRIMARY KEY)").unwrap();

        add_column_if_not_exists(&conn, "ideas", "effort", "TEXT NOT NULL DEFAULT ''").unwrap();
        add_column_if_not_exists(&conn, "ideas", "effort", "TEXT NOT NULL DEFAULT ''").unwrap();

        assert!(has_column(&conn, "ideas", "effort").unwrap());
        assert!(!has_column(&conn, "ideas", "impact").unwrap());
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM pragma_table_info('ideas')", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }
}
