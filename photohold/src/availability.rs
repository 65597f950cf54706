//! Read-side availability derivation for photos.
//!
//! The checker answers "can this photo be claimed right now" for display
//! and pre-flight purposes. It is deliberately NOT used as a gate before
//! writes: the authoritative check happens inside
//! [`Database::insert_if_no_active`], atomically with the insert, so there
//! is no window between checking and claiming. Answers from this module
//! may be stale by the time they are rendered.

use crate::database::Database;
use crate::error::Result;
use crate::reservation::PhotoId;

/// The disposition of a photo for a particular requester.
///
/// `HeldByOther` intentionally carries no information about who holds the
/// photo; the UI only needs to render "taken".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoAvailability {
    /// No active reservation exists; the photo can be claimed.
    Available,
    /// The requester's own active reservation holds the photo.
    OwnedByRequester,
    /// Someone else's active reservation holds the photo.
    HeldByOther,
}

impl std::fmt::Display for PhotoAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::OwnedByRequester => write!(f, "reserved by you"),
            Self::HeldByOther => write!(f, "reserved"),
        }
    }
}

/// Derives photo availability from reservation store reads.
///
/// # Examples
///
/// ```no_run
/// use photohold::database::{Database, DatabaseConfig};
/// use photohold::{AvailabilityChecker, PhotoId};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/photohold.db")).unwrap();
/// let checker = AvailabilityChecker::new(&db);
///
/// let photo = PhotoId::new("gallery-2024/042").unwrap();
/// if checker.is_available(&photo).unwrap() {
///     println!("{photo} can be claimed");
/// }
/// ```
pub struct AvailabilityChecker<'a> {
    db: &'a Database,
}

impl<'a> AvailabilityChecker<'a> {
    /// Creates a checker over the given database.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Returns true iff no active reservation exists for the photo.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    pub fn is_available(&self, photo_id: &PhotoId) -> Result<bool> {
        Ok(self.db.active_reservation_for(photo_id)?.is_none())
    }

    /// Returns the photo's disposition for the given requester.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    pub fn status_for(&self, photo_id: &PhotoId, user_id: &str) -> Result<PhotoAvailability> {
        match self.db.active_reservation_for(photo_id)? {
            None => Ok(PhotoAvailability::Available),
            Some(reservation) if reservation.owned_by(user_id) => {
                Ok(PhotoAvailability::OwnedByRequester)
            }
            Some(_) => Ok(PhotoAvailability::HeldByOther),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, test_draft};
    use crate::ReservationStatus;

    #[test]
    fn test_unreserved_photo_is_available() {
        let db = create_test_database();
        let checker = AvailabilityChecker::new(&db);
        let photo = PhotoId::new("p1").unwrap();

        assert!(checker.is_available(&photo).unwrap());
        assert_eq!(
            checker.status_for(&photo, "u-1").unwrap(),
            PhotoAvailability::Available
        );
    }

    #[test]
    fn test_claimed_photo_dispositions() {
        let mut db = create_test_database();
        db.insert_if_no_active(&test_draft("p1", "u-1"))
            .unwrap()
            .unwrap();

        let checker = AvailabilityChecker::new(&db);
        let photo = PhotoId::new("p1").unwrap();

        assert!(!checker.is_available(&photo).unwrap());
        assert_eq!(
            checker.status_for(&photo, "u-1").unwrap(),
            PhotoAvailability::OwnedByRequester
        );
        assert_eq!(
            checker.status_for(&photo, "u-2").unwrap(),
            PhotoAvailability::HeldByOther
        );
    }

    #[test]
    fn test_confirmed_and_received_still_hold_the_photo() {
        let mut db = create_test_database();
        let reservation = db
            .insert_if_no_active(&test_draft("p1", "u-1"))
            .unwrap()
            .unwrap();
        let photo = PhotoId::new("p1").unwrap();

        db.update_status(
            reservation.id(),
            &[ReservationStatus::Pending],
            ReservationStatus::Confirmed,
            None,
        )
        .unwrap();
        assert!(!AvailabilityChecker::new(&db).is_available(&photo).unwrap());

        db.update_status(
            reservation.id(),
            &[ReservationStatus::Confirmed],
            ReservationStatus::Received,
            None,
        )
        .unwrap();
        assert!(!AvailabilityChecker::new(&db).is_available(&photo).unwrap());
    }

    #[test]
    fn test_cancellation_restores_availability() {
        let mut db = create_test_database();
        let reservation = db
            .insert_if_no_active(&test_draft("p1", "u-1"))
            .unwrap()
            .unwrap();
        let photo = PhotoId::new("p1").unwrap();

        db.update_status(
            reservation.id(),
            ReservationStatus::allowed_sources(ReservationStatus::Cancelled),
            ReservationStatus::Cancelled,
            None,
        )
        .unwrap();

        let checker = AvailabilityChecker::new(&db);
        assert!(checker.is_available(&photo).unwrap());
        assert_eq!(
            checker.status_for(&photo, "u-1").unwrap(),
            PhotoAvailability::Available
        );
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(format!("{}", PhotoAvailability::Available), "available");
        assert_eq!(
            format!("{}", PhotoAvailability::OwnedByRequester),
            "reserved by you"
        );
        assert_eq!(format!("{}", PhotoAvailability::HeldByOther), "reserved");
    }
}
