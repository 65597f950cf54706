//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer, wrapping
//! library errors and providing the exit-code mapping that stands in for
//! HTTP status codes (conflict, permission denied, not found, ... each
//! get a distinct code so scripts can branch on the outcome).

use std::fmt;
use photohold::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Data directory not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 2: Conflict (photo already reserved)
    /// - 3: Permission denied
    /// - 4: Not found
    /// - 5: Invalid status transition
    /// - 6: Invalid arguments / validation failure
    /// - 7: Authentication required
    /// - 8: I/O error
    /// - 9: Configuration or data directory problem
    /// - 10: Other library error (storage failure, lock timeout, ...)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::Conflict { .. } => 2,
                LibError::PermissionDenied { .. } => 3,
                LibError::NotFound { .. } => 4,
                LibError::InvalidTransition { .. } => 5,
                LibError::Validation { .. } => 6,
                LibError::AuthenticationRequired { .. } => 7,
                LibError::Io(_) => 8,
                LibError::Configuration(_)
                | LibError::DataDirectoryNotFound { .. }
                | LibError::UnsupportedSchemaVersion { .. } => 9,
                _ => 10,
            },
            CliError::InvalidArguments(_) => 6,
            CliError::Io(_) => 8,
            CliError::NoDataDirectory | CliError::Config(_) => 9,
        }
    }

    /// Whether this error originates from the storage or I/O layer.
    ///
    /// Internal failures are logged with detail and surfaced opaquely;
    /// everything else prints its own message.
    pub fn is_internal(&self) -> bool {
        match self {
            CliError::Library(e) => e.is_internal(),
            CliError::Io(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::NoDataDirectory => {
                write!(
                    f,
                    "Data directory not found (use --data-dir or enable auto-init)"
                )
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
