//! The reservation service: create, cancel, advance, query.
//!
//! The service enforces who may do what (owner vs admin) and which status
//! changes are requested, then hands the actual mutation to one of the
//! store's two atomic primitives. It never reads a status and writes back
//! a derived one; the allowed source statuses travel into the conditional
//! UPDATE, so racing callers cannot double-apply a transition.

use serde::Serialize;

use crate::auth::Identity;
use crate::database::{Database, ListFilter};
use crate::error::{Error, Result};
use crate::reservation::{
    PhotoId, Reservation, ReservationDraft, ReservationId, ReservationStatus,
};

/// Counts of reservations by status for a query result.
///
/// Always recomputed from the returned records, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReservationStats {
    /// Total number of records in the result.
    pub total: usize,
    /// Number of `Pending` records.
    pub pending: usize,
    /// Number of `Confirmed` records.
    pub confirmed: usize,
    /// Number of `Received` records.
    pub received: usize,
    /// Number of `Cancelled` records.
    pub cancelled: usize,
}

impl ReservationStats {
    /// Computes stats over a slice of records.
    ///
    /// # Examples
    ///
    /// ```
    /// use photohold::ReservationStats;
    ///
    /// let stats = ReservationStats::from_records(&[]);
    /// assert_eq!(stats.total, 0);
    /// ```
    #[must_use]
    pub fn from_records(records: &[Reservation]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.status() {
                ReservationStatus::Pending => stats.pending += 1,
                ReservationStatus::Confirmed => stats.confirmed += 1,
                ReservationStatus::Received => stats.received += 1,
                ReservationStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

/// A query result: the matching records plus their per-status counts.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// The records matching the filter, oldest first.
    pub reservations: Vec<Reservation>,
    /// Per-status counts over `reservations`.
    pub stats: ReservationStats,
}

/// Orchestrates reservation operations over the store.
///
/// # Examples
///
/// ```no_run
/// use photohold::database::{Database, DatabaseConfig};
/// use photohold::{Identity, PhotoId, ReservationService};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/photohold.db")).unwrap();
/// let mut service = ReservationService::new(&mut db);
///
/// let requester = Identity::new("u-17", "Maria Keller", "maria@example.org");
/// let photo = PhotoId::new("gallery-2024/042").unwrap();
/// let reservation = service.create_reservation(photo, &requester, None).unwrap();
/// assert_eq!(reservation.user_id(), "u-17");
/// ```
pub struct ReservationService<'a> {
    db: &'a mut Database,
}

impl<'a> ReservationService<'a> {
    /// Creates a service over the given database.
    #[must_use]
    pub fn new(db: &'a mut Database) -> Self {
        Self { db }
    }

    /// Claims a photo for the requester.
    ///
    /// The requester's id, name and email are snapshotted onto the new
    /// record. The conflict check and the insert are one atomic storage
    /// operation; under concurrent claims on the same photo exactly one
    /// caller gets the record and the rest get `Conflict`.
    ///
    /// # Errors
    ///
    /// - `Error::Conflict` if the photo already has an active reservation
    /// - `Error::Validation` if the requester's user id is blank
    /// - `Error::Database` on storage failure
    pub fn create_reservation(
        &mut self,
        photo_id: PhotoId,
        requester: &Identity,
        message: Option<String>,
    ) -> Result<Reservation> {
        let draft = ReservationDraft::new(photo_id, requester)?.with_message(message);

        match self.db.insert_if_no_active(&draft)? {
            Some(reservation) => Ok(reservation),
            None => Err(Error::Conflict {
                photo_id: draft.photo_id().as_str().to_string(),
            }),
        }
    }

    /// Cancels a reservation.
    ///
    /// Allowed for the reservation's owner and for admins. Cancellation
    /// is a status transition, not a deletion; the record stays as
    /// history and the photo becomes claimable again.
    ///
    /// The ownership check reads the record first; that read is safe
    /// because the owning user of a record is immutable. The status
    /// condition itself is enforced atomically by the conditional update.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if no reservation with `id` exists
    /// - `Error::PermissionDenied` if the requester neither owns the
    ///   reservation nor is an admin
    /// - `Error::InvalidTransition` if the reservation is already
    ///   cancelled
    pub fn cancel_reservation(
        &mut self,
        id: ReservationId,
        requester: &Identity,
    ) -> Result<Reservation> {
        let existing = self.db.get_reservation(id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {id}"),
        })?;

        if !existing.owned_by(requester.user_id()) && !requester.is_admin() {
            return Err(Error::PermissionDenied {
                details: "only the reservation owner or an admin may cancel".to_string(),
            });
        }

        self.db.update_status(
            id,
            ReservationStatus::allowed_sources(ReservationStatus::Cancelled),
            ReservationStatus::Cancelled,
            None,
        )
    }

    /// Moves a reservation to a new status. Admin only.
    ///
    /// The legal source statuses for `to` are taken from the transition
    /// table and enforced inside the conditional update, so the record's
    /// status is never read before deciding; at most one of two racing
    /// admin actions succeeds.
    ///
    /// # Errors
    ///
    /// - `Error::PermissionDenied` if the requester is not an admin
    /// - `Error::NotFound` if no reservation with `id` exists
    /// - `Error::InvalidTransition` if the record's current status does
    ///   not permit the change (the record is left untouched)
    pub fn advance_status(
        &mut self,
        id: ReservationId,
        to: ReservationStatus,
        message: Option<&str>,
        requester: &Identity,
    ) -> Result<Reservation> {
        requester.require_admin("status update")?;

        self.db
            .update_status(id, ReservationStatus::allowed_sources(to), to, message)
    }

    /// Lists reservations matching the filter, with per-status counts.
    /// Admin only.
    ///
    /// The stats are recomputed from the returned records; nothing is
    /// stored. Reads take no write locks and may be slightly stale.
    ///
    /// # Errors
    ///
    /// - `Error::PermissionDenied` if the requester is not an admin
    /// - `Error::Database` on storage failure
    pub fn query(&self, filter: &ListFilter, requester: &Identity) -> Result<QueryOutcome> {
        requester.require_admin("reservation listing")?;

        let reservations = self.db.list_reservations(filter)?;
        let stats = ReservationStats::from_records(&reservations);
        Ok(QueryOutcome {
            reservations,
            stats,
        })
    }
}
