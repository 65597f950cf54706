//! Cancel command implementation.
//!
//! This module implements the `cancel` command. Cancellation is a status
//! transition, not a deletion; the record stays on file and the photo
//! becomes reservable again.

use crate::error::CliError;
use crate::utils::{current_identity, load_configuration, open_database, GlobalOptions};
use clap::Args;
use photohold::{ReservationId, ReservationService};

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id to cancel
    #[arg(value_name = "ID")]
    pub id: i64,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let requester = current_identity()?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let cancelled = ReservationService::new(&mut db)
            .cancel_reservation(ReservationId::new(self.id), &requester)
            .map_err(CliError::from)?;

        if !global.quiet {
            eprintln!(
                "Cancelled reservation {} for photo {}",
                cancelled.id(),
                cancelled.photo_id()
            );
        }

        Ok(())
    }
}
