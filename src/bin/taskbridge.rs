//! Command-line front end for the task manager.
//!
//! Usage:
//!
//! ```text
//! taskbridge [--project-name <NAME>] <command> [args]
//! ```
//!
//! Connection settings come from `JIRA_SERVER_URL`, `JIRA_USERNAME`,
//! `JIRA_API_TOKEN` and `JIRA_PROJECT_KEY`. Every command prints the outcome
//! message on stdout; logs go to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use mockable::DefaultClock;
use std::process::ExitCode;
use std::sync::Arc;
use taskbridge::task::{
    adapters::jira::{JiraClient, JiraConfig},
    domain::TaskFilter,
    services::TaskManager,
};
use tracing::error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type JiraTaskManager = TaskManager<JiraClient, DefaultClock>;

/// Manage tasks and checklists stored in Jira.
#[derive(Debug, Parser)]
#[command(name = "taskbridge", version, about, long_about = None)]
struct Cli {
    /// Project label used in messages. Defaults to the project key.
    #[arg(long, global = true)]
    project_name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Show the next task still to do
    Next,
    /// Append a timestamped entry to a task description
    Describe {
        /// Task title
        title: String,
        /// Text to append
        description: String,
    },
    /// Move a task to In Progress
    Start {
        /// Task title
        title: String,
    },
    /// Move a task to Done
    Complete {
        /// Task title
        title: String,
    },
    /// Show the status of a task
    Status {
        /// Task title
        title: String,
    },
    /// Move a task to any workflow status
    SetStatus {
        /// Task title
        title: String,
        /// Target status name, for example "In Review"
        status: String,
    },
    /// Manage checklist items
    #[command(subcommand)]
    Checklist(ChecklistCommand),
    /// List tasks
    List {
        /// Which tasks to list
        #[arg(short, long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Delete every task in the project
    DeleteAll {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
enum ChecklistCommand {
    /// Add checklist items to a task
    Add {
        /// Task title
        title: String,
        /// Checklist item names
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Mark a checklist item as done
    Complete {
        /// Task title
        title: String,
        /// Checklist item name
        item: String,
    },
    /// Show the next unchecked item
    Next {
        /// Task title
        title: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Wip,
    Done,
}

impl From<FilterArg> for TaskFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => Self::All,
            FilterArg::Wip => Self::Wip,
            FilterArg::Done => Self::Done,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = taskbridge::logging::init() {
        diagnose(&format!("failed to initialize logging: {err}"));
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(message) => {
            report(&message);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

#[expect(clippy::print_stdout, reason = "command output goes to stdout")]
fn report(message: &str) {
    println!("{message}");
}

#[expect(
    clippy::print_stderr,
    reason = "diagnostics emitted before tracing is available"
)]
fn diagnose(message: &str) {
    eprintln!("{message}");
}

async fn run(cli: Cli) -> Result<String, BoxError> {
    let config = JiraConfig::from_env()?;
    let tracker = JiraClient::connect(&config).await?;
    let manager: JiraTaskManager = TaskManager::new(
        Arc::new(tracker),
        Arc::new(DefaultClock),
        config.project().clone(),
    );
    let project_name = cli
        .project_name
        .unwrap_or_else(|| config.project().project_key().to_string());

    execute(&manager, &project_name, cli.command).await
}

async fn execute(
    manager: &JiraTaskManager,
    project_name: &str,
    command: Command,
) -> Result<String, BoxError> {
    let message = match command {
        Command::Add { title, description } => manager
            .add_task(project_name, &title, &description)
            .await?
            .to_string(),
        Command::Next => manager.get_next_task(project_name).await?.to_string(),
        Command::Describe { title, description } => manager
            .update_task_description(project_name, &title, &description)
            .await?
            .to_string(),
        Command::Start { title } => manager
            .mark_as_in_progress(project_name, &title)
            .await?
            .to_string(),
        Command::Complete { title } => manager
            .mark_as_completed(project_name, &title)
            .await?
            .to_string(),
        Command::Status { title } => manager
            .get_task_status(project_name, &title)
            .await?
            .to_string(),
        Command::SetStatus { title, status } => manager
            .set_task_status(project_name, &title, &status)
            .await?
            .to_string(),
        Command::Checklist(checklist) => {
            execute_checklist(manager, project_name, checklist).await?
        }
        Command::List { filter } => {
            let listing = manager.get_tasks(project_name, filter.into()).await?;
            let mut lines = vec![listing.to_string()];
            lines.extend(listing.tasks.iter().map(|task| {
                format!("  - {} [{}] ({})", task.name, task.id, task.status)
            }));
            lines.join("\n")
        }
        Command::DeleteAll { yes } => {
            if !yes {
                return Err("refusing to delete every task without --yes".into());
            }
            manager.delete_all_tasks(project_name).await?.to_string()
        }
    };
    Ok(message)
}

async fn execute_checklist(
    manager: &JiraTaskManager,
    project_name: &str,
    command: ChecklistCommand,
) -> Result<String, BoxError> {
    let message = match command {
        ChecklistCommand::Add { title, items } => manager
            .update_task_with_checklist(project_name, &title, items)
            .await?
            .to_string(),
        ChecklistCommand::Complete { title, item } => manager
            .complete_checklist_item(project_name, &title, &item)
            .await?
            .to_string(),
        ChecklistCommand::Next { title } => manager
            .get_next_unchecked_checklist_item(project_name, &title)
            .await?
            .to_string(),
    };
    Ok(message)
}
