use anyhow::Result;
use goalflow_core::NewJournalEntry;
use goalflow_service::GoalService;
use serde_json::json;

use crate::{JournalCommand, open_store, print_json};

pub(crate) async fn run(cmd: JournalCommand) -> Result<()> {
    let service = GoalService::new(open_store()?);
    match cmd {
        JournalCommand::Add { goal_id, content } => {
            print_json(&service.add_journal_entry(NewJournalEntry::new(goal_id, content)).await?)
        },
        JournalCommand::List { goal_id } => {
            print_json(&service.list_journal_entries(&goal_id).await?)
        },
        JournalCommand::Edit { id, content } => {
            service.edit_journal_entry(&id, &content).await?;
            print_json(&json!({ "updated": id }))
        },
        JournalCommand::Delete { id } => {
            service.delete_journal_entry(&id).await?;
            print_json(&json!({ "deleted": id }))
        },
    }
}
