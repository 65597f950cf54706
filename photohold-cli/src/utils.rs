//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI
//! commands: database opening, configuration loading, session identity
//! resolution, and output formatting.

use std::env;
use std::path::PathBuf;

use crate::error::CliError;
use photohold::database::DatabaseConfig;
use photohold::{AuthProvider, Config, ConfigBuilder, Database, Error, Identity};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory path.
///
/// Returns the default data directory location: `~/.photohold`.
pub fn resolve_data_dir() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".photohold")
}

/// Load configuration from the data directory's `config.yaml`.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = global.data_dir.clone().unwrap_or_else(resolve_data_dir);

    ConfigBuilder::new()
        .with_file(data_dir.join("config.yaml"))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options.
fn resolve_database_path(global: &GlobalOptions) -> PathBuf {
    let data_dir = global.data_dir.clone().unwrap_or_else(resolve_data_dir);
    data_dir.join("photohold.db")
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global);

    if !db_path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// An `AuthProvider` backed by the session environment.
///
/// The surrounding application resolves the session and hands the CLI
/// the requester via `PHOTOHOLD_USER_ID`, `PHOTOHOLD_USER_NAME`,
/// `PHOTOHOLD_USER_EMAIL` and `PHOTOHOLD_ADMIN`. The admin flag is taken
/// at face value; the CLI never derives privilege itself.
#[derive(Debug, Default)]
pub struct SessionAuthProvider;

impl AuthProvider for SessionAuthProvider {
    fn current_user(&self) -> photohold::Result<Identity> {
        let user_id = env::var("PHOTOHOLD_USER_ID")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::AuthenticationRequired {
                details: "no session (set PHOTOHOLD_USER_ID)".to_string(),
            })?;
        let user_name = env::var("PHOTOHOLD_USER_NAME").unwrap_or_default();
        let user_email = env::var("PHOTOHOLD_USER_EMAIL").unwrap_or_default();

        let identity = Identity::new(user_id, user_name, user_email);
        if is_truthy(env::var("PHOTOHOLD_ADMIN").ok().as_deref()) {
            Ok(identity.into_admin())
        } else {
            Ok(identity)
        }
    }
}

fn is_truthy(value: Option<&str>) -> bool {
    matches!(
        value.map(str::trim).map(str::to_lowercase).as_deref(),
        Some("1" | "true" | "yes")
    )
}

/// Resolve the current requester from the session environment.
pub fn current_identity() -> Result<Identity, CliError> {
    SessionAuthProvider.current_user().map_err(CliError::from)
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Build the JSON representation of a reservation used by all commands.
pub fn reservation_json(reservation: &photohold::Reservation) -> serde_json::Value {
    serde_json::json!({
        "id": reservation.id().value(),
        "photo_id": reservation.photo_id().as_str(),
        "user_id": reservation.user_id(),
        "user_name": reservation.user_name(),
        "user_email": reservation.user_email(),
        "status": reservation.status().as_str(),
        "message": reservation.message(),
        "created_at": format_timestamp(reservation.created_at()),
        "updated_at": format_timestamp(reservation.updated_at()),
    })
}
