//! List command implementation.
//!
//! This module implements the `list` command, which displays
//! reservations in various formats (table, JSON, CSV, TSV), always with
//! per-status counts recomputed from the listed records.

use crate::commands::parse_status;
use crate::error::CliError;
use crate::utils::{
    current_identity, format_timestamp, load_configuration, open_database, reservation_json,
    GlobalOptions,
};
use clap::{Args, ValueEnum};
use photohold::{
    ListFilter, PhotoId, Reservation, ReservationService, ReservationStats, ReservationStatus,
};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 9] = [
    "id",
    "photo_id",
    "user_id",
    "user_name",
    "user_email",
    "status",
    "message",
    "created_at",
    "updated_at",
];

/// List reservations with per-status counts (admin).
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "PHOTOHOLD_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Filter by status
    #[arg(long, value_name = "STATUS", value_parser = parse_status)]
    pub status: Option<ReservationStatus>,

    /// Filter by requesting user
    #[arg(long, value_name = "USER_ID")]
    pub user_id: Option<String>,

    /// Filter by photo
    #[arg(long, value_name = "PHOTO_ID")]
    pub photo_id: Option<String>,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format with a stats object
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let requester = current_identity()?;

        // Build the filter
        let mut filter = ListFilter::new();
        if let Some(status) = self.status {
            filter = filter.with_status(status);
        }
        if let Some(ref user_id) = self.user_id {
            filter = filter.with_user_id(user_id.clone());
        }
        if let Some(ref photo_id) = self.photo_id {
            let photo = PhotoId::new(photo_id)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            filter = filter.with_photo_id(photo);
        }

        // Query (the service enforces the admin gate)
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let outcome = ReservationService::new(&mut db)
            .query(&filter, &requester)
            .map_err(CliError::from)?;

        // Format and output to stdout
        match self.format {
            OutputFormat::Table => format_as_table(&outcome.reservations, &outcome.stats, global)?,
            OutputFormat::Json => format_as_json(&outcome.reservations, &outcome.stats)?,
            OutputFormat::Csv => format_as_delimited(&outcome.reservations, b',')?,
            OutputFormat::Tsv => format_as_delimited(&outcome.reservations, b'\t')?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table with a stats footer.
fn format_as_table(
    reservations: &[Reservation],
    stats: &ReservationStats,
    global: &GlobalOptions,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    // Print each reservation
    for res in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            res.id(),
            res.photo_id(),
            res.user_id(),
            res.user_name(),
            res.user_email(),
            res.status(),
            res.message().unwrap_or("-"),
            format_timestamp(res.created_at()),
            format_timestamp(res.updated_at()),
        )?;
    }

    // Stats footer goes to stderr so piped output stays clean
    if !global.quiet {
        eprintln!(
            "total: {}  pending: {}  confirmed: {}  received: {}  cancelled: {}",
            stats.total, stats.pending, stats.confirmed, stats.received, stats.cancelled
        );
    }

    Ok(())
}

/// Format reservations as a JSON object with records and stats.
fn format_as_json(
    reservations: &[Reservation],
    stats: &ReservationStats,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data = serde_json::json!({
        "reservations": reservations.iter().map(reservation_json).collect::<Vec<_>>(),
        "stats": {
            "total": stats.total,
            "pending": stats.pending,
            "confirmed": stats.confirmed,
            "received": stats.received,
            "cancelled": stats.cancelled,
        },
    });

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(reservations: &[Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    // Write header
    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    // Write each reservation
    for res in reservations {
        writer
            .write_record(&[
                res.id().to_string(),
                res.photo_id().to_string(),
                res.user_id().to_string(),
                res.user_name().to_string(),
                res.user_email().to_string(),
                res.status().to_string(),
                res.message().unwrap_or("").to_string(),
                format_timestamp(res.created_at()),
                format_timestamp(res.updated_at()),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
