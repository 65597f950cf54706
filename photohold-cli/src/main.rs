//! Main entry point for the photohold CLI.
//!
//! This is the command-line interface for the photo print reservation
//! system. It provides commands for claiming and managing reservations:
//! - `reserve`: Claim a photo print for pickup
//! - `cancel`: Cancel a reservation
//! - `status`: Check whether a photo can be reserved
//! - `list`: List reservations with per-status counts (admin)
//! - `update`: Update a single reservation's status (admin)
//! - `bulk-update`: Apply one status change to several reservations (admin)

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = photohold::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Status(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Update(cmd) => cmd.execute(&global),
        cli::Command::BulkUpdate(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::ShowDataDir(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if e.is_internal() {
                // Storage and I/O detail goes to the verbose log; callers
                // get an opaque failure.
                logger.info(&format!("internal failure detail: {e}"));
                eprintln!("Error: internal storage failure");
            } else {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
