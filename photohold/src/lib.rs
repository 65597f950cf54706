#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # photohold
//!
//! A library for managing reservations of shared photo prints.
//!
//! Community members claim a single print of a photo for pickup; at most
//! one active claim can exist per photo at any time, including under
//! concurrent claim attempts. Claims move through a small status
//! lifecycle (pending, confirmed, received, cancelled) driven by the
//! owner and by admins, and cancelled claims stay on record as history.
//!
//! ## Core Types
//!
//! - [`PhotoId`], [`ReservationId`]: identifiers
//! - [`Reservation`], [`ReservationStatus`], [`ReservationDraft`]: the
//!   record, its state machine, and the data to create one
//! - [`Database`]: SQLite-backed store with the two atomic primitives
//!   the invariant rests on
//! - [`ReservationService`], [`BulkUpdater`], [`AvailabilityChecker`]:
//!   the operation layer
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use photohold::{PhotoId, ReservationStatus};
//!
//! let photo = PhotoId::new("gallery-2024/042").unwrap();
//! assert_eq!(photo.as_str(), "gallery-2024/042");
//!
//! // The status state machine is a plain value type
//! assert!(ReservationStatus::Pending.can_transition_to(ReservationStatus::Confirmed));
//! assert!(!ReservationStatus::Cancelled.is_active());
//! ```

pub mod auth;
pub mod availability;
pub mod bulk;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod reservation;
pub mod service;

// Re-export key types at crate root for convenience
pub use auth::{AuthProvider, Identity, StaticAuthProvider};
pub use availability::{AvailabilityChecker, PhotoAvailability};
pub use bulk::{BulkFailure, BulkOutcome, BulkUpdater};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig, ListFilter};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{
    PhotoId, Reservation, ReservationDraft, ReservationId, ReservationStatus, ACTIVE_STATUSES,
};
pub use service::{QueryOutcome, ReservationService, ReservationStats};
