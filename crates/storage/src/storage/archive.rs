use goalflow_core::{Archive, ArchiveSummary, now_millis};

use super::{RowPolicy, Storage, Table, clear_table, goals, ideas, journal, quotes, subtasks};
use crate::error::StorageError;
use crate::migrations::SCHEMA_VERSION;

impl Storage {
    /// Every record in the store, read inside one transaction so the
    /// collections agree with each other.
    ///
    /// # Errors
    /// Returns `DataCorruption` if any row cannot be decoded, or error if a
    /// read fails.
    pub fn snapshot(&self) -> Result<Archive, StorageError> {
        self.transaction(|tx| {
            Ok(Archive {
                goals: goals::fetch_all_goals(tx, RowPolicy::Strict)?,
                subtasks: subtasks::fetch_all_subtasks(tx, RowPolicy::Strict)?,
                ideas: ideas::fetch_all_ideas(tx, RowPolicy::Strict)?,
                quotes: Some(quotes::fetch_all_quotes(tx, RowPolicy::Strict)?),
                journal_entries: journal::fetch_all_entries(tx, RowPolicy::Strict)?,
                exported_at: Some(now_millis()),
                version: Some(SCHEMA_VERSION),
            })
        })
    }

    /// Replaces the store's contents with `archive` in one transaction.
    ///
    /// Goals, subtasks, ideas and journal entries are always replaced. Quotes
    /// are replaced only when the archive carries a quote list; otherwise the
    /// existing quotes stay. A failure anywhere leaves the store untouched.
    ///
    /// # Errors
    /// Returns error if a delete or insert fails (for example a duplicate id).
    pub fn replace_all(&self, archive: &Archive) -> Result<ArchiveSummary, StorageError> {
        self.transaction(|tx| {
            for table in [Table::Subtasks, Table::JournalEntries, Table::Goals, Table::Ideas] {
                let removed = clear_table(tx, table)?;
                tracing::debug!(%table, removed, "Cleared before import");
            }
            for goal in &archive.goals {
                goals::insert_goal(tx, goal)?;
            }
            for subtask in &archive.subtasks {
                subtasks::insert_subtask(tx, subtask)?;
            }
            for idea in &archive.ideas {
                ideas::insert_idea(tx, idea)?;
            }
            for entry in &archive.journal_entries {
                journal::insert_entry(tx, entry)?;
            }
            if let Some(list) = &archive.quotes {
                clear_table(tx, Table::Quotes)?;
                for quote in list {
                    quotes::insert_quote(tx, quote)?;
                }
            }
            let summary = archive.summary();
            tracing::info!(
                goals = summary.goals,
                subtasks = summary.subtasks,
                ideas = summary.ideas,
                quotes = summary.quotes,
                journal_entries = summary.journal_entries,
                "Archive imported"
            );
            Ok(summary)
        })
    }
}
