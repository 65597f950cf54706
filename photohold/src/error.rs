//! Error types for the photohold library.
//!
//! This module provides the error hierarchy for all reservation operations,
//! using `thiserror` for ergonomic error handling.
//!
//! Validation, authentication and state-machine errors are expected,
//! recoverable-by-the-caller conditions and carry a specific variant each.
//! Storage and I/O failures are wrapped transparently; callers that face
//! users are expected to log the detail and surface an opaque message.

use thiserror::Error;

/// Result type alias for operations that may fail with a photohold error.
///
/// # Examples
///
/// ```
/// use photohold::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the photohold library.
///
/// This enum encompasses all error conditions that can occur during
/// photo reservation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No authenticated requester was supplied.
    #[error("authentication required: {details}")]
    AuthenticationRequired {
        /// What was attempted without an identity.
        details: String,
    },

    /// The requester is not allowed to perform the operation.
    #[error("permission denied: {details}")]
    PermissionDenied {
        /// Why the operation was refused.
        details: String,
    },

    /// The requested reservation does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The photo already has an active reservation.
    #[error("photo {photo_id} already reserved")]
    Conflict {
        /// The contested photo identifier.
        photo_id: String,
    },

    /// An illegal status change was requested.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        /// The record's current status.
        from: String,
        /// The requested target status.
        to: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: std::path::PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if this error is a reservation conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use photohold::Error;
    ///
    /// let err = Error::Conflict { photo_id: "gallery-2024/042".into() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Check if this error indicates a missing record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if this error is an illegal status change.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Check if this error came from the storage or I/O layer.
    ///
    /// These are the failures spec'd to be logged with detail and
    /// surfaced opaquely, as opposed to the expected caller errors.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Io(_) | Self::LockTimeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_error_display() {
        let err = Error::Conflict {
            photo_id: "advent/017".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("already reserved"));
        assert!(display.contains("advent/017"));
        assert!(err.is_conflict());
        assert!(!err.is_internal());
    }

    #[test]
    fn test_invalid_transition_error_display() {
        let err = Error::InvalidTransition {
            from: "cancelled".to_string(),
            to: "confirmed".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid transition"));
        assert!(display.contains("cancelled"));
        assert!(display.contains("confirmed"));
        assert!(err.is_invalid_transition());
    }

    #[test]
    fn test_permission_denied_error_display() {
        let err = Error::PermissionDenied {
            details: "only the reservation owner or an admin may cancel".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("permission denied"));
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_authentication_required_error_display() {
        let err = Error::AuthenticationRequired {
            details: "reserve".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("authentication required"));
    }

    #[test]
    fn test_not_found_error_display() {
        let err = Error::NotFound {
            resource: "reservation 42".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("reservation 42"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error_display() {
        let err = Error::Validation {
            field: "photo_id".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("photo_id"));
    }

    #[test]
    fn test_io_error_conversion_is_internal() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(err.is_internal());
    }

    #[test]
    fn test_lock_timeout_error() {
        let err = Error::LockTimeout { seconds: 5 };
        let display = format!("{err}");
        assert!(display.contains("lock timeout"));
        assert!(display.contains('5'));
        assert!(err.is_internal());
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Err(Error::NotFound {
                resource: "reservation 7".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
