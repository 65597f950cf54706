//! Database layer for durable storage of photo reservations.
//!
//! This module provides a SQLite-based storage layer, including connection
//! management, schema versioning, and the two atomic primitives the
//! reservation invariant rests on: conditional insert
//! ([`Database::insert_if_no_active`]) and conditional status update
//! ([`Database::update_status`]).
//!
//! # Examples
//!
//! ```no_run
//! use photohold::database::{Database, DatabaseConfig};
//! use photohold::{Identity, PhotoId, ReservationDraft};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/photohold.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Claim a photo
//! let requester = Identity::new("u-17", "Maria Keller", "maria@example.org");
//! let draft = ReservationDraft::new(PhotoId::new("gallery-2024/042").unwrap(), &requester).unwrap();
//! let reservation = db.insert_if_no_active(&draft).unwrap();
//! assert!(reservation.is_some());
//! ```

mod config;
mod connection;
pub mod migrations;
mod schema;
mod store;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;
pub use store::ListFilter;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
