//! Command handlers for the CLI surface.
//!
//! Each subcommand is a thin wrapper over one store operation: load happens
//! in `main`, the handler mutates or queries, prints, and exits nonzero on
//! failure. The interactive path lives in `menu` instead and never exits
//! nonzero.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;
use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::board;
use crate::fields::{check_priority, Status};
use crate::store::{FilterValue, TaskStore};
use crate::task::{Task, TaskPatch};

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive menu (the default when no subcommand is given).
    Menu,

    /// Add a new task.
    Add {
        /// Task name.
        name: String,
        /// Free-form due date.
        #[arg(long, default_value = "")]
        due: String,
        /// Longer description.
        #[arg(long, default_value = "")]
        desc: String,
        /// Priority from 1 (lowest) to 10 (highest).
        #[arg(long, default_value_t = 5)]
        priority: i64,
        /// Status: to-be-started | in-progress | finished.
        #[arg(long, value_enum, default_value_t = Status::ToBeStarted)]
        status: Status,
    },

    /// List every task with its number.
    List,

    /// Show the status board.
    Board,

    /// Edit fields on a task by its number.
    Edit {
        /// Task number as shown by `list`.
        number: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        /// Priority from 1 (lowest) to 10 (highest).
        #[arg(long)]
        priority: Option<i64>,
        /// Status: to-be-started | in-progress | finished.
        #[arg(long, value_enum)]
        status: Option<Status>,
    },

    /// Delete a task by its number.
    Delete {
        /// Task number as shown by `list`.
        number: String,
    },

    /// Search tasks by keyword in name or description.
    Search { keyword: String },

    /// Filter tasks by exact field value.
    Filter {
        /// Field to match: status | priority_level | due_date.
        field: String,
        /// Value to match exactly.
        value: String,
    },

    /// Show task totals.
    Stats,

    /// Copy the task file into a timestamped backup.
    Backup,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add a task from command-line flags.
pub fn cmd_add(
    store: &mut TaskStore,
    name: String,
    due: String,
    desc: String,
    priority: i64,
    status: Status,
) {
    let priority = match check_priority(priority) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = store.add(Task::new(name, due, desc, priority, status)) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    println!("Added task {}.", store.len());
}

pub fn cmd_list(store: &TaskStore) {
    print!("{}", board::render_list(store.tasks()));
}

pub fn cmd_board(store: &TaskStore) {
    print!("{}", board::render_board(store.tasks()));
}

/// Apply the given field flags to one task.
pub fn cmd_edit(
    store: &mut TaskStore,
    number: String,
    name: Option<String>,
    due: Option<String>,
    desc: Option<String>,
    priority: Option<i64>,
    status: Option<Status>,
) {
    let number = match store.resolve_index(&number) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let priority = match priority.map(check_priority).transpose() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let patch = TaskPatch {
        task_name: name,
        task_due_date: due,
        task_description: desc,
        priority_level: priority,
        status,
    };
    if patch.is_empty() {
        eprintln!("Nothing to change; pass at least one field flag.");
        std::process::exit(1);
    }
    match store.edit(number, &patch) {
        Ok(()) => println!("Updated task {number}."),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

pub fn cmd_delete(store: &mut TaskStore, number: String) {
    let number = match store.resolve_index(&number) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    match store.delete(number) {
        Ok(removed) => println!("Deleted {:?}.", removed.task_name),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

pub fn cmd_search(store: &TaskStore, keyword: String) {
    let hits = store.search(keyword.trim());
    println!("{} matching task(s).", hits.len());
    print!("{}", board::render_selection(&hits));
}

pub fn cmd_filter(store: &TaskStore, field: String, value: String) {
    let value = if field == "priority_level" {
        match value.trim().parse::<i64>() {
            Ok(level) => FilterValue::Priority(level),
            Err(_) => {
                eprintln!("{:?} is not a whole number.", value.trim());
                std::process::exit(1);
            }
        }
    } else {
        FilterValue::Text(value)
    };

    let hits = store.filter(&field, &value);
    println!("{} matching task(s).", hits.len());
    print!("{}", board::render_selection(&hits));
}

pub fn cmd_stats(store: &TaskStore) {
    let stats = store.statistics();
    println!("Total tasks: {}", stats.total);
    println!("Completed tasks: {}", stats.completed);
}

pub fn cmd_backup(store: &TaskStore) {
    match create_backup(store.path()) {
        Ok(backup_path) => println!("Backup created: {backup_path}"),
        Err(e) => {
            eprintln!("Failed to create backup: {e}");
            std::process::exit(1);
        }
    }
}

/// Copy the task file into a `backup/` directory next to it, stamped with the
/// current local time.
pub fn create_backup(path: &Path) -> io::Result<String> {
    if !path.exists() {
        return Err(io::Error::new(io::ErrorKind::NotFound, "task file does not exist"));
    }

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let backup_dir = parent.join("backup");
    fs::create_dir_all(&backup_dir)?;

    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("tasks.json");
    let backup_path = backup_dir.join(format!("{timestamp}_{file_name}"));
    fs::copy(path, &backup_path)?;
    Ok(backup_path.display().to_string())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
