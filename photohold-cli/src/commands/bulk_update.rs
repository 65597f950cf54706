//! Bulk update command implementation.
//!
//! Applies one status change to several reservation ids. The batch is
//! partial-success by design: ids that cannot make the transition are
//! reported with their reason, the rest still change, and the exit code
//! stays 0 so an admin correcting many records is not failed by one
//! already-terminal row.

use crate::commands::parse_status;
use crate::error::CliError;
use crate::utils::{
    current_identity, load_configuration, open_database, reservation_json, GlobalOptions,
};
use clap::{Args, ValueEnum};
use photohold::{BulkUpdater, ReservationId, ReservationStatus};

/// Apply one status change to several reservations (admin).
#[derive(Args)]
pub struct BulkUpdateCommand {
    /// Reservation ids to update
    #[arg(value_name = "ID", required = true, num_args = 1..)]
    pub ids: Vec<i64>,

    /// Target status (confirmed, received, cancelled)
    #[arg(long, value_name = "STATUS", value_parser = parse_status)]
    pub status: ReservationStatus,

    /// Replace the message on every updated reservation
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "summary", ignore_case = true)]
    pub format: BulkOutputFormat,
}

/// Output format for the bulk update report.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum BulkOutputFormat {
    /// Human-readable summary lines
    Summary,
    /// JSON object with updated records and per-id failures
    Json,
}

impl BulkUpdateCommand {
    /// Execute the bulk-update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let requester = current_identity()?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let ids: Vec<ReservationId> = self.ids.iter().copied().map(ReservationId::new).collect();

        let outcome = BulkUpdater::new(&mut db)
            .bulk_advance(&ids, self.status, self.message.as_deref(), &requester)
            .map_err(CliError::from)?;

        match self.format {
            BulkOutputFormat::Summary => {
                println!("updated {}", outcome.updated_count());
                for failure in &outcome.failed {
                    println!("failed {}: {}", failure.id, failure.reason);
                }
                if !global.quiet && !outcome.is_total_success() {
                    eprintln!(
                        "{} of {} reservations were not updated",
                        outcome.failed.len(),
                        ids.len()
                    );
                }
            }
            BulkOutputFormat::Json => {
                let json_data = serde_json::json!({
                    "updatedCount": outcome.updated_count(),
                    "reservations": outcome.updated.iter().map(reservation_json).collect::<Vec<_>>(),
                    "failed": outcome
                        .failed
                        .iter()
                        .map(|f| serde_json::json!({ "id": f.id.value(), "reason": f.reason }))
                        .collect::<Vec<_>>(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json_data).map_err(|e| CliError::Io(
                        std::io::Error::new(std::io::ErrorKind::Other, e)
                    ))?
                );
            }
        }

        Ok(())
    }
}
