//! Update command implementation.
//!
//! Single-record admin status update. The transition is validated against
//! the status state machine and applied conditionally; an illegal change
//! is rejected with its own exit code and leaves the record untouched.

use crate::commands::parse_status;
use crate::error::CliError;
use crate::utils::{
    current_identity, load_configuration, open_database, reservation_json, GlobalOptions,
};
use clap::Args;
use photohold::{ReservationId, ReservationService, ReservationStatus};

/// Update a single reservation's status (admin).
#[derive(Args)]
pub struct UpdateCommand {
    /// Reservation id to update
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Target status (confirmed, received, cancelled)
    #[arg(long, value_name = "STATUS", value_parser = parse_status)]
    pub status: ReservationStatus,

    /// Replace the reservation's message
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Print the updated record as JSON
    #[arg(long)]
    pub json: bool,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let requester = current_identity()?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let updated = ReservationService::new(&mut db)
            .advance_status(
                ReservationId::new(self.id),
                self.status,
                self.message.as_deref(),
                &requester,
            )
            .map_err(CliError::from)?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&reservation_json(&updated))
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?
            );
        } else if !global.quiet {
            eprintln!(
                "Reservation {} is now {}",
                updated.id(),
                updated.status()
            );
        }

        Ok(())
    }
}
