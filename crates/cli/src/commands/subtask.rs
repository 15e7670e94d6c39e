use anyhow::Result;
use goalflow_core::NewSubtask;
use goalflow_service::GoalService;
use serde_json::json;

use crate::{SubtaskCommand, open_store, print_json};

pub(crate) async fn run(cmd: SubtaskCommand) -> Result<()> {
    let service = GoalService::new(open_store()?);
    match cmd {
        SubtaskCommand::Add { goal_id, title, target_date } => {
            print_json(&service.add_subtask(NewSubtask::new(goal_id, title, target_date)).await?)
        },
        SubtaskCommand::List { goal_id } => print_json(&service.list_subtasks(&goal_id).await?),
        SubtaskCommand::Done { id } => print_json(&service.set_subtask_completed(&id, true).await?),
        SubtaskCommand::Undone { id } => {
            print_json(&service.set_subtask_completed(&id, false).await?)
        },
        SubtaskCommand::Rename { id, title } => print_json(&service.rename_subtask(&id, &title).await?),
        SubtaskCommand::Delete { id } => {
            service.delete_subtask(&id).await?;
            print_json(&json!({ "deleted": id }))
        },
    }
}
