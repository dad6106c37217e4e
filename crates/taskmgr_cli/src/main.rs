//! taskmgr CLI: flag parsing, dispatch, and process exit policy.
//!
//! # Responsibility
//! - Map parsed arguments onto core service calls.
//! - Map outcomes and errors onto rendered messages and exit codes:
//!   domain errors report and exit cleanly, storage failures exit nonzero.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use taskmgr_core::{
    CreateTaskRequest, JsonStore, Priority, ServiceError, SortKey, StatusFilter, StoreError,
    TaskEdit, TaskError, TaskFilter, TaskService, TaskStore,
};

mod config;
mod export;
mod render;

use export::ExportFormat;

#[derive(Parser)]
#[command(name = "taskmgr", version, about = "A personal CLI task manager")]
struct Cli {
    /// Data directory (defaults to TASKMGR_DATA_DIR or ~/.taskmgr).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task.
    Add {
        /// Task description.
        description: String,

        /// Tag the task.
        #[arg(short, long)]
        tag: Option<String>,

        /// Due date (e.g. 2025-09-01).
        #[arg(short, long)]
        due: Option<String>,

        /// Priority: low | medium | high.
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// List tasks.
    List {
        /// Filter by status: pending | done.
        #[arg(short, long)]
        status: Option<String>,

        /// Filter by tag.
        #[arg(short, long)]
        tag: Option<String>,

        /// Filter by priority: low | medium | high.
        #[arg(short, long)]
        priority: Option<String>,

        /// Only show overdue tasks.
        #[arg(long)]
        overdue: bool,

        /// Sort by: due | priority | created | alphabetical.
        #[arg(long)]
        sort: Option<String>,
    },

    /// Mark a task as completed.
    Done {
        /// Task ID.
        id: u64,
    },

    /// Delete a task.
    Delete {
        /// Task ID.
        id: u64,
    },

    /// Search tasks by keyword.
    Search {
        /// Search term.
        term: String,
    },

    /// Edit a task's text, tag, priority, or due date.
    Edit {
        /// Task ID.
        id: u64,

        /// New text.
        #[arg(long)]
        text: Option<String>,

        /// New tag.
        #[arg(short, long)]
        tag: Option<String>,

        /// New priority (low, medium, high).
        #[arg(short, long)]
        priority: Option<String>,

        /// New due date (YYYY-MM-DD); pass "" to clear it.
        #[arg(short, long)]
        due: Option<String>,
    },

    /// Show task statistics.
    Stats,

    /// Export tasks to a file.
    Export {
        /// Format: json, md, or csv.
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output filename without extension.
        #[arg(short, long, default_value = "tasks_export")]
        output: String,
    },

    /// Reassign all task ids to compact sequential values.
    Renumber,
}

fn main() {
    let cli = Cli::parse();
    let paths = config::resolve(cli.data_dir);

    // Logging is best effort; the tool stays usable without it.
    let _ = taskmgr_core::init_logging(taskmgr_core::default_log_level(), &paths.log_dir);

    let store = match JsonStore::open(&paths.tasks_file) {
        Ok(store) => store,
        Err(err) => {
            render::fatal_store_error(&err);
            process::exit(1);
        }
    };
    let service = TaskService::new(store);

    if let Err(err) = run(cli.command, &service) {
        match err {
            ServiceError::Task(err) => render::task_error(&err),
            ServiceError::Store(err) => {
                render::fatal_store_error(&err);
                process::exit(1);
            }
        }
    }
}

fn run<S: TaskStore>(command: Commands, service: &TaskService<S>) -> Result<(), ServiceError> {
    match command {
        Commands::Add {
            description,
            tag,
            due,
            priority,
        } => {
            let task = service.create(&CreateTaskRequest {
                text: description,
                tag,
                due,
                priority,
            })?;
            render::task_added(&task);
        }

        Commands::List {
            status,
            tag,
            priority,
            overdue,
            sort,
        } => {
            let sort_key = match sort.as_deref() {
                Some(raw) => match SortKey::parse(raw) {
                    Some(key) => Some(key),
                    None => {
                        render::usage_error(
                            "Unsupported sort key. Use: due, priority, created, or alphabetical",
                        );
                        return Ok(());
                    }
                },
                None => None,
            };
            let priority = match priority {
                Some(raw) => Some(
                    Priority::parse(&raw).ok_or(TaskError::InvalidPriority(raw))?,
                ),
                None => None,
            };
            let filter = TaskFilter {
                status: status.as_deref().map(StatusFilter::parse),
                tag,
                priority,
                overdue,
                search: None,
            };
            render::print_list(&service.list(&filter, sort_key)?);
        }

        Commands::Done { id } => {
            render::complete_outcome(service.complete(id)?);
        }

        Commands::Delete { id } => {
            render::task_deleted(&service.delete(id)?);
        }

        Commands::Search { term } => {
            render::print_search(&term, &service.search(&term)?);
        }

        Commands::Edit {
            id,
            text,
            tag,
            priority,
            due,
        } => {
            let outcome = service.update(
                id,
                &TaskEdit {
                    text,
                    tag,
                    priority,
                    due,
                },
            )?;
            render::update_outcome(id, outcome);
        }

        Commands::Stats => {
            render::print_stats(&service.stats()?);
        }

        Commands::Export { format, output } => {
            let format = match ExportFormat::parse(&format) {
                Some(format) => format,
                None => {
                    render::usage_error("Unsupported export format. Use: json, md, or csv");
                    return Ok(());
                }
            };
            let tasks = service.snapshot()?;
            let filename = export::write_export(&tasks, format, &output)
                .map_err(|err| ServiceError::Store(StoreError::Io(err)))?;
            render::export_done(tasks.len(), &filename);
        }

        Commands::Renumber => {
            render::renumber_outcome(&service.renumber()?);
        }
    }

    Ok(())
}
