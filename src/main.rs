//! # tt - Task Tracker CLI
//!
//! A single-user task tracker that keeps everything in one local JSON file.
//! Tasks carry a name, a free-form due date, a description, a 1-10 priority,
//! and a three-stage status, and can be browsed as a flat list or as a
//! status board with priority coloring.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the interactive menu
//! tt
//!
//! # Or drive it directly
//! tt add "Write report" --due 2024-01-31 --priority 8
//! tt list
//! tt board
//! tt edit 1 --status finished
//! tt stats
//! ```
//!
//! The task file defaults to `./tasks.json`; pass `--file` to use another
//! path. Deleting or editing refers to the 1-based task numbers printed by
//! `tt list`.

use std::path::PathBuf;

use clap::Parser;

pub mod board;
pub mod cli;
pub mod cmd;
pub mod fields;
pub mod menu;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use store::TaskStore;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Completions never touch the task file.
    if let Some(Commands::Completions { shell }) = &cli.command {
        cmd_completions(*shell);
        return;
    }

    let path = cli.file.unwrap_or_else(|| PathBuf::from("tasks.json"));
    let mut store = TaskStore::load(&path);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Completions { .. } => unreachable!("handled above"),
        Commands::Menu => menu::run_menu(&mut store),
        Commands::Add { name, due, desc, priority, status } => {
            cmd_add(&mut store, name, due, desc, priority, status)
        }
        Commands::List => cmd_list(&store),
        Commands::Board => cmd_board(&store),
        Commands::Edit { number, name, due, desc, priority, status } => {
            cmd_edit(&mut store, number, name, due, desc, priority, status)
        }
        Commands::Delete { number } => cmd_delete(&mut store, number),
        Commands::Search { keyword } => cmd_search(&store, keyword),
        Commands::Filter { field, value } => cmd_filter(&store, field, value),
        Commands::Stats => cmd_stats(&store),
        Commands::Backup => cmd_backup(&store),
    }
}
