use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Menu-driven, file-backed task tracker.
/// Storage defaults to ./tasks.json or a path passed via --file.
#[derive(Parser)]
#[command(name = "tt", version, about = "Personal task tracking CLI")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// With no subcommand the interactive menu opens.
    #[command(subcommand)]
    pub command: Option<Commands>,
}
