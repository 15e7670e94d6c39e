use anyhow::Result;
use goalflow_core::{IdeaPatch, NewIdea};
use goalflow_service::IdeaService;
use serde_json::json;

use crate::{IdeaCommand, open_store, print_json};

pub(crate) async fn run(cmd: IdeaCommand) -> Result<()> {
    let service = IdeaService::new(open_store()?);
    match cmd {
        IdeaCommand::Add { content, effort, impact } => {
            print_json(&service.add_idea(NewIdea::new(content, effort, impact)).await?)
        },
        IdeaCommand::List => print_json(&service.list_ideas().await?),
        IdeaCommand::Edit { id, content, effort, impact } => {
            let patch = IdeaPatch { content, effort, impact };
            print_json(&service.update_idea(&id, patch).await?)
        },
        IdeaCommand::Convert { id } => {
            let (idea, goal) = service.convert_idea(&id).await?;
            print_json(&json!({ "idea": idea, "goal": goal }))
        },
        IdeaCommand::Delete { id } => {
            service.delete_idea(&id).await?;
            print_json(&json!({ "deleted": id }))
        },
    }
}
