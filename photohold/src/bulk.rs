//! Administrative bulk status updates.
//!
//! Applies one `(status, message)` change to a list of reservation ids in
//! a single administrative action, one conditional update per id. The
//! batch is partial-success by design: an id that cannot make the
//! transition (already terminal, unknown, ...) is reported with its
//! reason and does not abort the rest. Storage-level failures do abort,
//! since they indicate the store itself is unhealthy rather than a bad
//! item.

use serde::Serialize;

use crate::auth::Identity;
use crate::database::Database;
use crate::error::Result;
use crate::reservation::{Reservation, ReservationId, ReservationStatus};
use crate::service::ReservationService;

/// One id that could not be updated, with the reason it was skipped.
#[derive(Debug, Clone, Serialize)]
pub struct BulkFailure {
    /// The reservation id that failed to update.
    pub id: ReservationId,
    /// Human-readable reason, e.g. "invalid transition from cancelled to confirmed".
    pub reason: String,
}

/// Result of a bulk update: what changed and what didn't.
#[derive(Debug, Clone, Default)]
pub struct BulkOutcome {
    /// Records that were updated, in input order.
    pub updated: Vec<Reservation>,
    /// Ids that were not updated, each with a reason, in input order.
    pub failed: Vec<BulkFailure>,
}

impl BulkOutcome {
    /// Number of records that changed.
    #[must_use]
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    /// Whether every id in the batch was updated.
    #[must_use]
    pub fn is_total_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies status changes to batches of reservations. Admin only.
///
/// Built on [`ReservationService::advance_status`]; every per-id change
/// goes through the same transition validation and the same atomic store
/// primitive as a single-record update.
///
/// # Examples
///
/// ```no_run
/// use photohold::database::{Database, DatabaseConfig};
/// use photohold::{BulkUpdater, Identity, ReservationId, ReservationStatus};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/photohold.db")).unwrap();
/// let admin = Identity::new("u-1", "Office", "office@example.org").into_admin();
///
/// let mut updater = BulkUpdater::new(&mut db);
/// let outcome = updater
///     .bulk_advance(
///         &[ReservationId::new(1), ReservationId::new(2)],
///         ReservationStatus::Confirmed,
///         Some("prints ready for pickup"),
///         &admin,
///     )
///     .unwrap();
/// println!("updated {}, skipped {}", outcome.updated_count(), outcome.failed.len());
/// ```
pub struct BulkUpdater<'a> {
    db: &'a mut Database,
}

impl<'a> BulkUpdater<'a> {
    /// Creates a bulk updater over the given database.
    #[must_use]
    pub fn new(db: &'a mut Database) -> Self {
        Self { db }
    }

    /// Applies `(to, message)` to each id, collecting per-id outcomes.
    ///
    /// The admin gate is checked once up front; a non-admin requester
    /// fails the whole batch before anything is attempted. After that,
    /// per-id errors (`NotFound`, `InvalidTransition`) are collected into
    /// `failed` and the batch continues.
    ///
    /// # Errors
    ///
    /// - `Error::PermissionDenied` if the requester is not an admin
    /// - `Error::Database` / `Error::Io` if the store fails; ids already
    ///   updated stay updated (each id is its own transaction)
    pub fn bulk_advance(
        &mut self,
        ids: &[ReservationId],
        to: ReservationStatus,
        message: Option<&str>,
        requester: &Identity,
    ) -> Result<BulkOutcome> {
        requester.require_admin("bulk update")?;

        let mut outcome = BulkOutcome::default();
        let mut service = ReservationService::new(self.db);

        for &id in ids {
            match service.advance_status(id, to, message, requester) {
                Ok(reservation) => outcome.updated.push(reservation),
                Err(e) if e.is_internal() => return Err(e),
                Err(e) => {
                    log::debug!("bulk update skipped reservation {id}: {e}");
                    outcome.failed.push(BulkFailure {
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(outcome)
    }
}
