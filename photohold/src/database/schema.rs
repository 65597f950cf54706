//! Database schema definitions and SQL constants.
//!
//! This module contains the table definitions, indices, and shared SQL
//! statements for the reservation store.

/// Current schema version for the database.
///
/// Stored in the metadata table and checked on open to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Rows are never deleted; cancellation is a status change, so the full
/// claim history of every photo stays auditable. The user name and email
/// columns are a snapshot taken at creation time, not foreign keys.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        photo_id TEXT NOT NULL,
        user_id TEXT NOT NULL,
        user_name TEXT NOT NULL,
        user_email TEXT NOT NULL,
        status TEXT NOT NULL
            CHECK (status IN ('pending', 'confirmed', 'received', 'cancelled')),
        message TEXT,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to create the partial unique index enforcing the core
/// invariant: at most one active reservation per photo.
///
/// Because the index only covers active statuses, cancelled rows keep
/// accumulating as history while the photo becomes reservable again. The
/// insert and the conflict check are thereby a single atomic operation;
/// no separate availability read guards the write path.
pub const CREATE_ACTIVE_PHOTO_INDEX: &str = r"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_reservations_active_photo
    ON reservations(photo_id)
    WHERE status IN ('pending', 'confirmed', 'received')";

/// SQL statement to create an index on the `photo_id` column.
///
/// Speeds up per-photo history listings and availability reads.
pub const CREATE_PHOTO_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_photo ON reservations(photo_id)";

/// SQL statement to create an index on the `user_id` column.
///
/// Speeds up filtered lists by requesting user.
pub const CREATE_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON reservations(user_id)";

/// SQL statement to create an index on the `status` column.
pub const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_status ON reservations(status)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a new reservation row.
///
/// Plain INSERT, never INSERT OR REPLACE: a violation of the active-photo
/// index must surface as a constraint error, not silently replace the
/// competing claim.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (photo_id, user_id, user_name, user_email, status, message, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

/// Column list shared by every SELECT that materializes full rows.
pub const RESERVATION_COLUMNS: &str =
    "id, photo_id, user_id, user_name, user_email, status, message, created_at, updated_at";
