//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which claims a photo
//! print for the current session's user.

use crate::error::CliError;
use crate::utils::{
    current_identity, load_configuration, open_database, reservation_json, GlobalOptions,
};
use clap::Args;
use photohold::{PhotoId, ReservationService};

/// Reserve a photo print for pickup.
#[derive(Args)]
pub struct ReserveCommand {
    /// Photo identifier from the gallery
    #[arg(value_name = "PHOTO_ID")]
    pub photo_id: String,

    /// Optional note for the pickup desk
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Print the created record as JSON instead of just the id
    #[arg(long)]
    pub json: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Resolve the requester from the session
        let requester = current_identity()?;

        // 2. Validate the photo id
        let photo_id = PhotoId::new(&self.photo_id)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        // 3. Open database
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        // 4. Claim the photo; a competing active claim surfaces as a
        //    conflict with its own exit code
        let reservation = ReservationService::new(&mut db)
            .create_reservation(photo_id, &requester, self.message)
            .map_err(CliError::from)?;

        // 5. Output the new id (shell-friendly) or the full record
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&reservation_json(&reservation))
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?
            );
        } else {
            println!("{}", reservation.id());
            if !global.quiet {
                eprintln!(
                    "Reserved photo {} (reservation {})",
                    reservation.photo_id(),
                    reservation.id()
                );
            }
        }

        Ok(())
    }
}
