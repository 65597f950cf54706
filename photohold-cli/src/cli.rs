//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BulkUpdateCommand, CancelCommand, CompletionsCommand, InitCommand, ListCommand,
    ReserveCommand, ShowDataDirCommand, StatusCommand, UpdateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing shared photo print reservations.
#[derive(Parser)]
#[command(name = "photohold")]
#[command(version, about = "Manage shared photo print reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "PHOTOHOLD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "PHOTOHOLD_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "PHOTOHOLD_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Reserve a photo print for pickup
    Reserve(ReserveCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Check whether a photo can be reserved
    Status(StatusCommand),

    /// List reservations with per-status counts (admin)
    List(ListCommand),

    /// Update a single reservation's status (admin)
    Update(UpdateCommand),

    /// Apply one status change to several reservations (admin)
    BulkUpdate(BulkUpdateCommand),

    /// Initialize the photohold data directory and database
    Init(InitCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
