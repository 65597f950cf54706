//! Reservation store operations.
//!
//! This module implements the storage primitives of the reservation core.
//! Beyond plain reads it exposes exactly two write operations, and both
//! are single atomic transactions:
//!
//! - [`Database::insert_if_no_active`] - claim a photo unless it already
//!   has an active claim. The check and the insert are one statement,
//!   arbitrated by the partial unique index on active rows, so two
//!   concurrent claims on the same photo can never both succeed.
//! - [`Database::update_status`] - conditionally move a reservation
//!   through the status state machine. The allowed source statuses are
//!   part of the UPDATE's WHERE clause, so a contended transition is won
//!   by at most one caller.
//!
//! No other code path mutates a reservation's status.

use std::time::{Duration, SystemTime};

use rusqlite::{params, Connection, OptionalExtension, ToSql, TransactionBehavior};

use crate::error::{Error, Result};
use crate::reservation::{PhotoId, Reservation, ReservationDraft, ReservationId};
use crate::ReservationStatus;

use super::connection::Database;
use super::schema::{INSERT_RESERVATION, RESERVATION_COLUMNS};

/// Converts a `SystemTime` to Unix epoch seconds for database storage.
///
/// # Errors
///
/// Returns an error if the time is before the Unix epoch.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| Error::Validation {
            field: "timestamp".into(),
            message: format!("Invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64)
}

/// Helper function to deserialize a reservation from a database row.
///
/// Expects the columns of [`RESERVATION_COLUMNS`] in order.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let photo_id: String = row.get(1)?;
    let user_id: String = row.get(2)?;
    let user_name: String = row.get(3)?;
    let user_email: String = row.get(4)?;
    let status: String = row.get(5)?;
    let message: Option<String> = row.get(6)?;
    let created_secs: i64 = row.get(7)?;
    let updated_secs: i64 = row.get(8)?;

    let photo_id = PhotoId::new(photo_id)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let status = ReservationStatus::parse(&status)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Reservation::from_parts(
        ReservationId::new(id),
        photo_id,
        user_id,
        user_name,
        user_email,
        status,
        message,
        unix_secs_to_systemtime(created_secs),
        unix_secs_to_systemtime(updated_secs),
    ))
}

/// Fetches a single reservation by id on an arbitrary connection.
///
/// Shared between the public read API and the transactional write paths.
fn fetch_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
    let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?");
    let mut stmt = conn.prepare_cached(&sql)?;
    stmt.query_row(params![id.value()], row_to_reservation)
        .optional()
        .map_err(Error::from)
}

/// Filter for listing reservations.
///
/// All set fields are AND-combined; an empty filter lists everything.
///
/// # Examples
///
/// ```
/// use photohold::{ListFilter, ReservationStatus};
///
/// let filter = ListFilter::new()
///     .with_status(ReservationStatus::Pending)
///     .with_user_id("u-17");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Restrict to reservations in this status.
    pub status: Option<ReservationStatus>,
    /// Restrict to reservations owned by this user.
    pub user_id: Option<String>,
    /// Restrict to reservations of this photo.
    pub photo_id: Option<PhotoId>,
}

impl ListFilter {
    /// Creates an empty filter matching all reservations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to a status.
    #[must_use]
    pub const fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the filter to an owning user.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Restricts the filter to a photo.
    #[must_use]
    pub fn with_photo_id(mut self, photo_id: PhotoId) -> Self {
        self.photo_id = Some(photo_id);
        self
    }
}

impl Database {
    /// Atomically inserts a new `Pending` reservation unless the photo
    /// already has an active claim.
    ///
    /// This is the single enforcement point of the one-active-reservation
    /// invariant. The insert runs inside an IMMEDIATE transaction and the
    /// partial unique index on active rows performs the conflict check as
    /// part of the write itself; there is no separate read that a
    /// concurrent request could race past.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` with the stored record on success
    /// - `Ok(None)` if another reservation currently holds the photo
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or the
    /// insert fails for reasons other than the active-claim constraint.
    pub fn insert_if_no_active(&mut self, draft: &ReservationDraft) -> Result<Option<Reservation>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let now_secs = systemtime_to_unix_secs(draft.created_at_or_now())?;

        let inserted = tx.execute(
            INSERT_RESERVATION,
            params![
                draft.photo_id().as_str(),
                draft.user_id(),
                draft.user_name(),
                draft.user_email(),
                ReservationStatus::Pending.as_str(),
                draft.message(),
                now_secs,
                now_secs,
            ],
        );

        match inserted {
            Ok(_) => {
                let id = ReservationId::new(tx.last_insert_rowid());
                tx.commit()?;
                Ok(Some(Reservation::from_parts(
                    id,
                    draft.photo_id().clone(),
                    draft.user_id().to_string(),
                    draft.user_name().to_string(),
                    draft.user_email().to_string(),
                    ReservationStatus::Pending,
                    draft.message().map(str::to_string),
                    unix_secs_to_systemtime(now_secs),
                    unix_secs_to_systemtime(now_secs),
                )))
            }
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                // The only constraint a pending insert with non-null
                // bindings can trip is the active-photo unique index:
                // another claim holds the photo. Dropping the transaction
                // rolls back; nothing was written.
                log::debug!(
                    "insert declined, photo {} already has an active reservation",
                    draft.photo_id()
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Conditionally updates a reservation's status.
    ///
    /// The update succeeds only if the record's current status is one of
    /// `allowed_from`; the guard is part of the UPDATE statement itself,
    /// so when two callers contend for the same transition at most one
    /// wins and the other observes `InvalidTransition`. A `None` message
    /// leaves the stored message untouched; `Some` replaces it. The
    /// `updated_at` timestamp is refreshed on success.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if no reservation with `id` exists
    /// - `Error::InvalidTransition` if the current status is not in
    ///   `allowed_from` (the record is left untouched)
    /// - `Error::Database` on storage failure
    pub fn update_status(
        &mut self,
        id: ReservationId,
        allowed_from: &[ReservationStatus],
        to: ReservationStatus,
        message: Option<&str>,
    ) -> Result<Reservation> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let now_secs = systemtime_to_unix_secs(SystemTime::now())?;

        let mut changed = 0;
        if !allowed_from.is_empty() {
            let placeholders = vec!["?"; allowed_from.len()].join(", ");
            let sql = format!(
                "UPDATE reservations
                 SET status = ?, message = COALESCE(?, message), updated_at = ?
                 WHERE id = ? AND status IN ({placeholders})"
            );

            let to_value = to.as_str();
            let id_value = id.value();
            let from_values: Vec<&'static str> =
                allowed_from.iter().map(|s| s.as_str()).collect();

            let mut sql_params: Vec<&dyn ToSql> = vec![&to_value, &message, &now_secs, &id_value];
            for from in &from_values {
                sql_params.push(from);
            }

            changed = tx.execute(&sql, sql_params.as_slice())?;
        }

        if changed == 0 {
            // Distinguish a missing record from an illegal transition
            // without leaving the transaction in between.
            let current: Option<String> = tx
                .query_row(
                    "SELECT status FROM reservations WHERE id = ?",
                    params![id.value()],
                    |row| row.get(0),
                )
                .optional()?;

            return match current {
                None => Err(Error::NotFound {
                    resource: format!("reservation {id}"),
                }),
                Some(status) => Err(Error::InvalidTransition {
                    from: status,
                    to: to.as_str().to_string(),
                }),
            };
        }

        let reservation = fetch_reservation(&tx, id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {id}"),
        })?;

        tx.commit()?;
        Ok(reservation)
    }

    /// Retrieves a reservation by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if it doesn't
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation(&self, id: ReservationId) -> Result<Option<Reservation>> {
        fetch_reservation(&self.conn, id)
    }

    /// Returns the active reservation for a photo, if any.
    ///
    /// At most one can exist; the partial unique index guarantees it.
    /// This is a plain read and takes no write lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn active_reservation_for(&self, photo_id: &PhotoId) -> Result<Option<Reservation>> {
        let sql = format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations
             WHERE photo_id = ? AND status IN ('pending', 'confirmed', 'received')"
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        stmt.query_row(params![photo_id.as_str()], row_to_reservation)
            .optional()
            .map_err(Error::from)
    }

    /// Lists reservations matching the filter, oldest first.
    ///
    /// All set filter fields are AND-combined. Reads run without write
    /// locks and may observe state slightly older than a concurrent
    /// writer's; the write path never depends on this view.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn list_reservations(&self, filter: &ListFilter) -> Result<Vec<Reservation>> {
        let status_value = filter.status.map(ReservationStatus::as_str);

        let mut clauses: Vec<&str> = Vec::new();
        let mut sql_params: Vec<&dyn ToSql> = Vec::new();

        if let Some(ref status) = status_value {
            clauses.push("status = ?");
            sql_params.push(status);
        }
        if let Some(ref user_id) = filter.user_id {
            clauses.push("user_id = ?");
            sql_params.push(user_id);
        }
        let photo_value = filter.photo_id.as_ref().map(PhotoId::as_str);
        if let Some(ref photo_id) = photo_value {
            clauses.push("photo_id = ?");
            sql_params.push(photo_id);
        }

        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        let sql = format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations{where_clause} ORDER BY id"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let reservations = stmt
            .query_map(sql_params.as_slice(), row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(reservations)
    }
}
