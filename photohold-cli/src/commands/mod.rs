//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `reserve`: Claim a photo print for pickup
//! - `cancel`: Cancel a reservation
//! - `status`: Check whether a photo can be reserved
//! - `list`: List reservations with per-status counts
//! - `update`: Update a single reservation's status
//! - `bulk_update`: Apply one status change to several reservations
//! - `init`: Initialize the data directory and database
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod bulk_update;
pub mod cancel;
pub mod completions;
pub mod init;
pub mod list;
pub mod reserve;
pub mod show_data_dir;
pub mod status;
pub mod update;

pub use bulk_update::BulkUpdateCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use reserve::ReserveCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use status::StatusCommand;
pub use update::UpdateCommand;

use photohold::ReservationStatus;

/// Parse a status argument (used as a clap value parser).
pub(crate) fn parse_status(value: &str) -> Result<ReservationStatus, String> {
    ReservationStatus::parse(value).map_err(|e| e.to_string())
}
