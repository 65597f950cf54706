//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the photohold data directory and database.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Args;
use photohold::database::{Database, DatabaseConfig};
use std::path::PathBuf;

/// Default configuration file contents written by `--with-config`.
const DEFAULT_CONFIG: &str = "\
# photohold configuration
#
# maximum_lock_wait_seconds: 30
";

/// Initialize the photohold data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Create a default configuration file
    #[arg(long)]
    pub with_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Note: This command ignores --disable-autoinit (initializing is the
    /// point). The --data-dir flag means "where to create" here.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = self
            .data_dir
            .or_else(|| global.data_dir.clone())
            .unwrap_or_else(resolve_data_dir);

        std::fs::create_dir_all(&data_dir)?;

        // Opening with auto_create initializes the schema
        let db_path = data_dir.join("photohold.db");
        Database::open(DatabaseConfig::new(&db_path)).map_err(CliError::from)?;

        if self.with_config {
            let config_path = data_dir.join("config.yaml");
            if !config_path.exists() {
                std::fs::write(&config_path, DEFAULT_CONFIG)?;
            }
        }

        if !global.quiet {
            eprintln!("Initialized photohold in {}", data_dir.display());
        }
        println!("{}", db_path.display());

        Ok(())
    }
}
