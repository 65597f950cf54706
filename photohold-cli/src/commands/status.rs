//! Status command implementation.
//!
//! Pre-flight availability check for a photo. The answer is for display
//! only; the authoritative conflict check happens atomically inside
//! `reserve`, so a photo shown as available here can still be taken by
//! the time the claim lands.

use crate::error::CliError;
use crate::utils::{current_identity, load_configuration, open_database, GlobalOptions};
use clap::Args;
use photohold::{AvailabilityChecker, PhotoAvailability, PhotoId};

/// Check whether a photo can be reserved.
#[derive(Args)]
pub struct StatusCommand {
    /// Photo identifier from the gallery
    #[arg(value_name = "PHOTO_ID")]
    pub photo_id: String,
}

impl StatusCommand {
    /// Execute the status command.
    ///
    /// Prints one of `available`, `reserved by you`, `reserved`. The
    /// holder of a foreign reservation is never revealed. Exit code 0 in
    /// all three cases; the output is the answer.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let requester = current_identity()?;

        let photo_id = PhotoId::new(&self.photo_id)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let disposition = AvailabilityChecker::new(&db)
            .status_for(&photo_id, requester.user_id())
            .map_err(CliError::from)?;

        println!("{disposition}");

        if !global.quiet {
            if let PhotoAvailability::Available = disposition {
                eprintln!("Photo {photo_id} can be reserved");
            }
        }

        Ok(())
    }
}
