//! Common test utilities for integration tests.

use tempfile::TempDir;

use photohold::database::{Database, DatabaseConfig};
use photohold::{Identity, PhotoId};

/// Creates a test database in a temporary directory.
///
/// The returned `TempDir` must be kept alive for the duration of the
/// test; dropping it removes the database file.
#[allow(dead_code)]
pub fn temp_database() -> (TempDir, Database) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db = open_at(&dir);
    (dir, db)
}

/// Opens another connection to the database inside `dir`.
///
/// Used by concurrency tests where every thread gets its own connection,
/// the way independent request handlers would.
#[allow(dead_code)]
pub fn open_at(dir: &TempDir) -> Database {
    let path = dir.path().join("test.db");
    Database::open(DatabaseConfig::new(path)).expect("failed to open database")
}

/// A regular community member identity.
#[allow(dead_code)]
pub fn member(user_id: &str) -> Identity {
    Identity::new(
        user_id,
        format!("Member {user_id}"),
        format!("{user_id}@example.org"),
    )
}

/// An admin identity.
#[allow(dead_code)]
pub fn admin() -> Identity {
    Identity::new("admin-1", "Office", "office@example.org").into_admin()
}

/// Shorthand for building a photo id.
///
/// # Panics
///
/// Panics on an invalid id; acceptable in test code.
#[allow(dead_code)]
pub fn photo(id: &str) -> PhotoId {
    PhotoId::new(id).expect("valid photo id")
}
