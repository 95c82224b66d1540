//! sb - Sprint board CLI
//!
//! A command-line interface for a single-user project-tracking board:
//! tasks, sprints, backlog, and kanban columns, persisted to a local
//! snapshot file.
//!
//! # Examples
//!
//! ```bash
//! # Create a task in the backlog
//! sb task create --title "Fix login" --priority high
//!
//! # Create and start a sprint
//! sb sprint create --name "Sprint 1" \
//!     --start-date 2026-08-10T00:00:00Z --end-date 2026-08-24T00:00:00Z
//! sb sprint start <id>
//!
//! # Put a task on the board and move it across columns
//! sb task assign <task-id> <sprint-id>
//! sb task move <task-id> in-progress
//!
//! # Inspect the board
//! sb board show --pretty
//! ```

mod board_commands;
mod cli;
mod commands;
mod error;
mod logger;
mod notifier;
mod sprint_commands;
mod task_commands;


use crate::{
    board_commands::BoardCommands,
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
    notifier::ConsoleNotifier,
    sprint_commands::SprintCommands,
    task_commands::TaskCommands,
};

use sb_core::{
    NewSprint, NewTask, SprintDto, SprintPatch, TaskDto, TaskPatch, TaskPriority, TaskStatus,
    parse_timestamp, parse_uuid,
};
use sb_persist::SnapshotRepository;
use sb_store::BoardStore;

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use uuid::Uuid;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load and validate configuration
    let config = sb_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let config_dir = sb_config::Config::config_dir()?;
            let log_dir = config_dir.join(&config.logging.dir);

            std::fs::create_dir_all(&log_dir).map_err(|e| CliError::Logger {
                message: format!("Failed to create log directory {}: {}", log_dir.display(), e),
            })?;

            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;
    config.log_summary();

    // The store is built once here and handed to the dispatcher; nothing
    // else in the process can reach it.
    let repository = SnapshotRepository::new(config.storage_path()?);
    let mut store = BoardStore::open(repository, vec![Box::new(ConsoleNotifier)]);

    let value = dispatch(&mut store, cli.command)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", output);

    Ok(())
}

fn dispatch(store: &mut BoardStore, command: Commands) -> CliResult<serde_json::Value> {
    match command {
        // Task commands
        Commands::Task { action } => match action {
            TaskCommands::Create {
                title,
                description,
                status,
                priority,
                assignee,
                sprint_id,
            } => {
                let input = NewTask {
                    title,
                    description,
                    status: TaskStatus::from_str(&status)?,
                    priority: TaskPriority::from_str(&priority)?,
                    assignee,
                    sprint_id: sprint_id
                        .as_deref()
                        .map(|id| parse_uuid(id, "sprint_id"))
                        .transpose()?,
                };

                let task = store.create_task(input);
                Ok(serde_json::to_value(TaskDto::from(&task))?)
            }
            TaskCommands::Update {
                id,
                title,
                description,
                status,
                priority,
                assignee,
                clear_assignee,
            } => {
                let id = parse_uuid(&id, "id")?;
                let patch = TaskPatch {
                    title,
                    description,
                    status: status.as_deref().map(TaskStatus::from_str).transpose()?,
                    priority: priority.as_deref().map(TaskPriority::from_str).transpose()?,
                    assignee: if clear_assignee {
                        Some(None)
                    } else {
                        assignee.map(Some)
                    },
                };

                store.update_task(id, patch);
                task_json(store, id)
            }
            TaskCommands::Delete { id } => {
                let id = parse_uuid(&id, "id")?;
                store.delete_task(id);
                Ok(serde_json::json!({ "deleted": id.to_string() }))
            }
            TaskCommands::Move { id, status } => {
                let id = parse_uuid(&id, "id")?;
                store.move_task(id, TaskStatus::from_str(&status)?);
                task_json(store, id)
            }
            TaskCommands::Assign { id, sprint_id } => {
                let id = parse_uuid(&id, "id")?;
                let sprint_id = parse_uuid(&sprint_id, "sprint_id")?;
                store.assign_task_to_sprint(id, sprint_id)?;
                task_json(store, id)
            }
            TaskCommands::Unassign { id } => {
                let id = parse_uuid(&id, "id")?;
                store.remove_task_from_sprint(id);
                task_json(store, id)
            }
            TaskCommands::List => Ok(serde_json::to_value(
                store.tasks().iter().map(TaskDto::from).collect::<Vec<_>>(),
            )?),
        },

        // Sprint commands
        Commands::Sprint { action } => match action {
            SprintCommands::Create {
                name,
                start_date,
                end_date,
                active,
            } => {
                let input = NewSprint {
                    name,
                    start_date: parse_timestamp(&start_date, "start_date")?,
                    end_date: parse_timestamp(&end_date, "end_date")?,
                    is_active: active,
                };

                let sprint = store.create_sprint(input);
                Ok(serde_json::to_value(SprintDto::from(&sprint))?)
            }
            SprintCommands::Update {
                id,
                name,
                start_date,
                end_date,
            } => {
                let id = parse_uuid(&id, "id")?;
                let patch = SprintPatch {
                    name,
                    start_date: start_date
                        .as_deref()
                        .map(|v| parse_timestamp(v, "start_date"))
                        .transpose()?,
                    end_date: end_date
                        .as_deref()
                        .map(|v| parse_timestamp(v, "end_date"))
                        .transpose()?,
                };

                store.update_sprint(id, patch);
                sprint_json(store, id)
            }
            SprintCommands::Delete { id } => {
                let id = parse_uuid(&id, "id")?;
                store.delete_sprint(id);
                Ok(serde_json::json!({ "deleted": id.to_string() }))
            }
            SprintCommands::Start { id } => {
                let id = parse_uuid(&id, "id")?;
                store.start_sprint(id);
                sprint_json(store, id)
            }
            SprintCommands::End { id } => {
                let id = parse_uuid(&id, "id")?;
                store.end_sprint(id);
                sprint_json(store, id)
            }
            SprintCommands::List => Ok(serde_json::to_value(
                store
                    .sprints()
                    .iter()
                    .map(SprintDto::from)
                    .collect::<Vec<_>>(),
            )?),
        },

        // Board views
        Commands::Board { action } => match action {
            BoardCommands::Backlog => Ok(serde_json::to_value(
                store
                    .backlog_tasks()
                    .into_iter()
                    .map(TaskDto::from)
                    .collect::<Vec<_>>(),
            )?),
            BoardCommands::Column { status } => {
                let status = TaskStatus::from_str(&status)?;
                Ok(serde_json::to_value(
                    store
                        .tasks_by_status(status)
                        .into_iter()
                        .map(TaskDto::from)
                        .collect::<Vec<_>>(),
                )?)
            }
            BoardCommands::Show => {
                let mut columns = serde_json::Map::new();
                for status in TaskStatus::ALL {
                    let tasks: Vec<TaskDto> = store
                        .tasks_by_status(status.clone())
                        .into_iter()
                        .map(TaskDto::from)
                        .collect();
                    columns.insert(status.as_str().to_string(), serde_json::to_value(tasks)?);
                }
                Ok(serde_json::Value::Object(columns))
            }
        },
    }
}

/// The task as it stands after an operation, or null if the id matched
/// nothing (unknown ids are absorbed as no-ops by the store).
fn task_json(store: &BoardStore, id: Uuid) -> CliResult<serde_json::Value> {
    match store.tasks().iter().find(|t| t.id == id) {
        Some(task) => Ok(serde_json::to_value(TaskDto::from(task))?),
        None => Ok(serde_json::Value::Null),
    }
}

fn sprint_json(store: &BoardStore, id: Uuid) -> CliResult<serde_json::Value> {
    match store.sprints().iter().find(|s| s.id == id) {
        Some(sprint) => Ok(serde_json::to_value(SprintDto::from(sprint))?),
        None => Ok(serde_json::Value::Null),
    }
}
