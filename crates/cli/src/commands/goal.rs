use anyhow::Result;
use goalflow_core::{GoalPatch, GoalQuery, NewGoal, today};
use goalflow_service::GoalService;
use serde_json::json;

use crate::{GoalCommand, GoalFields, open_store, print_json};

pub(crate) async fn run(cmd: GoalCommand) -> Result<()> {
    let service = GoalService::new(open_store()?);
    match cmd {
        GoalCommand::Add { title, target_date, priority, fields } => {
            let input = with_fields(NewGoal::new(title, target_date, priority), fields);
            print_json(&service.create_goal(input).await?)
        },
        GoalCommand::List { status, priority, search, sort, order } => {
            let query = GoalQuery { status, priority, search, sort_by: sort, order };
            let goals = service.list_goals(&query).await?;
            let rows: Vec<_> = goals
                .iter()
                .map(|goal| json!({ "goal": goal, "deadline": service.deadline_today(goal).label() }))
                .collect();
            print_json(&rows)
        },
        GoalCommand::Show { id } => print_json(&service.goal_detail(&id, today()).await?),
        GoalCommand::Update { id, title, target_date, priority, status, fields } => {
            let patch = GoalPatch {
                title,
                short_description: fields.short_description,
                description: fields.description,
                target_date,
                category: fields.category,
                priority,
                status,
                progress: None,
                icon: fields.icon,
            };
            print_json(&service.update_goal(&id, patch).await?)
        },
        GoalCommand::Toggle { id } => print_json(&service.toggle_status(&id).await?),
        GoalCommand::Delete { id } => {
            service.delete_goal(&id).await?;
            print_json(&json!({ "deleted": id }))
        },
    }
}

fn with_fields(mut input: NewGoal, fields: GoalFields) -> NewGoal {
    if let Some(v) = fields.short_description {
        input = input.short_description(v);
    }
    if let Some(v) = fields.description {
        input = input.description(v);
    }
    if let Some(v) = fields.category {
        input = input.category(v);
    }
    if let Some(v) = fields.icon {
        input = input.icon(v);
    }
    input
}
