use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use goalflow_core::{GoalSortKey, GoalStatus, Priority, Rating, SortOrder, env_config};
use goalflow_storage::Storage;
use goalflow_storage::traits::RecordStore;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "goalflow")]
#[command(about = "Local-first goal tracker with subtasks, ideas and journals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, list and edit goals
    #[command(subcommand)]
    Goal(GoalCommand),
    /// Checklist items under a goal
    #[command(subcommand)]
    Subtask(SubtaskCommand),
    /// Idea box
    #[command(subcommand)]
    Idea(IdeaCommand),
    /// Journal entries attached to a goal
    #[command(subcommand)]
    Journal(JournalCommand),
    /// Quote of the day
    Quote {
        /// List every stored quote instead
        #[arg(long)]
        all: bool,
    },
    /// Write every record to a timestamped JSON file
    Export {
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Replace all records with the contents of an export file
    Import { file: PathBuf },
}

#[derive(Subcommand)]
enum GoalCommand {
    Add {
        title: String,
        #[arg(short, long)]
        target_date: NaiveDate,
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
        #[command(flatten)]
        fields: GoalFields,
    },
    List {
        #[arg(short, long)]
        status: Option<GoalStatus>,
        #[arg(short, long)]
        priority: Option<Priority>,
        /// Case-insensitive match on title, short description or category
        #[arg(short = 'q', long)]
        search: Option<String>,
        #[arg(long, default_value = "created-at")]
        sort: GoalSortKey,
        #[arg(long, default_value = "desc")]
        order: SortOrder,
    },
    /// Goal with deadline, subtasks and journal
    Show { id: String },
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        target_date: Option<NaiveDate>,
        #[arg(short, long)]
        priority: Option<Priority>,
        #[arg(short, long)]
        status: Option<GoalStatus>,
        #[command(flatten)]
        fields: GoalFields,
    },
    /// Flip between active and completed
    Toggle { id: String },
    /// Delete the goal with its subtasks and journal entries
    Delete { id: String },
}

/// Optional free-text goal fields shared by `add` and `update`.
#[derive(Args)]
struct GoalFields {
    #[arg(long)]
    short_description: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(short, long)]
    category: Option<String>,
    #[arg(long)]
    icon: Option<String>,
}

#[derive(Subcommand)]
enum SubtaskCommand {
    Add {
        goal_id: String,
        title: String,
        #[arg(short, long)]
        target_date: NaiveDate,
    },
    List { goal_id: String },
    Done { id: String },
    Undone { id: String },
    Rename { id: String, title: String },
    Delete { id: String },
}

#[derive(Subcommand)]
enum IdeaCommand {
    Add {
        content: String,
        #[arg(short, long, default_value = "none")]
        effort: Rating,
        #[arg(short, long, default_value = "none")]
        impact: Rating,
    },
    List,
    Edit {
        id: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(short, long)]
        effort: Option<Rating>,
        #[arg(short, long)]
        impact: Option<Rating>,
    },
    /// Turn the idea into a goal due in 30 days
    Convert { id: String },
    Delete { id: String },
}

#[derive(Subcommand)]
enum JournalCommand {
    Add { goal_id: String, content: String },
    List { goal_id: String },
    Edit { id: String, content: String },
    Delete { id: String },
}

pub(crate) fn get_db_path() -> PathBuf {
    env_config::db_path()
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) fn open_store() -> Result<Arc<dyn RecordStore>> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    Ok(Arc::new(Storage::open(&db_path)?))
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Goal(cmd) => commands::goal::run(cmd).await,
        Commands::Subtask(cmd) => commands::subtask::run(cmd).await,
        Commands::Idea(cmd) => commands::idea::run(cmd).await,
        Commands::Journal(cmd) => commands::journal::run(cmd).await,
        Commands::Quote { all } => commands::archive::run_quote(all).await,
        Commands::Export { dir } => commands::archive::run_export(&dir).await,
        Commands::Import { file } => commands::archive::run_import(&file).await,
    }
}
