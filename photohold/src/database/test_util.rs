//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::auth::Identity;
use crate::database::{Database, DatabaseConfig};
use crate::reservation::{PhotoId, ReservationDraft};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a non-admin test identity for the given user id.
#[must_use]
pub fn test_identity(user_id: &str) -> Identity {
    Identity::new(
        user_id,
        format!("User {user_id}"),
        format!("{user_id}@example.org"),
    )
}

/// Creates a reservation draft for the given photo and user.
///
/// # Panics
///
/// Panics if the photo id or draft is invalid. This is acceptable in test
/// code where we want to fail fast.
#[must_use]
pub fn test_draft(photo_id: &str, user_id: &str) -> ReservationDraft {
    let photo = PhotoId::new(photo_id).unwrap();
    ReservationDraft::new(photo, &test_identity(user_id)).unwrap()
}
