//! Reservation types for tracking photo print claims.
//!
//! This module provides the core data model: photo and reservation
//! identifiers, the reservation status state machine, the stored
//! [`Reservation`] record, and the [`ReservationDraft`] used to create one.

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::auth::Identity;

/// Opaque reference to a photo in the external catalog.
///
/// The reservation core accepts any non-empty identifier and never checks
/// the catalog for existence; a photo id that no catalog entry matches
/// simply never accumulates reservations.
///
/// # Examples
///
/// ```
/// use photohold::PhotoId;
///
/// let id = PhotoId::new("gallery-2024/042").unwrap();
/// assert_eq!(id.as_str(), "gallery-2024/042");
///
/// // Invalid: empty after trimming
/// assert!(PhotoId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoId(String);

impl PhotoId {
    /// Creates a new photo id.
    ///
    /// The value is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty after trimming.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "photo_id".into(),
                message: "photo id must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage-assigned identifier of a reservation record.
///
/// Assigned on insert and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ReservationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Lifecycle status of a reservation.
///
/// A reservation is created `Pending`, is moved forward by admin action
/// (`Confirmed`, then `Received` once the print was picked up), and can be
/// cancelled from any active status. `Received` and `Cancelled` are
/// terminal; re-reserving a photo creates a new record rather than
/// reopening an old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Requested by a user, awaiting admin confirmation.
    Pending,
    /// Confirmed by an admin; the print is being prepared.
    Confirmed,
    /// Picked up by the user. Terminal.
    Received,
    /// Withdrawn by the owner or an admin. Terminal.
    Cancelled,
}

/// The statuses that count against the one-active-claim-per-photo rule.
pub const ACTIVE_STATUSES: [ReservationStatus; 3] = [
    ReservationStatus::Pending,
    ReservationStatus::Confirmed,
    ReservationStatus::Received,
];

impl ReservationStatus {
    /// Returns the lowercase storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Received => "received",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its storage representation.
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized values.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "received" => Ok(Self::Received),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ValidationError {
                field: "status".into(),
                message: format!("unrecognized status: {s}"),
            }),
        }
    }

    /// Whether a reservation in this status holds the photo.
    ///
    /// # Examples
    ///
    /// ```
    /// use photohold::ReservationStatus;
    ///
    /// assert!(ReservationStatus::Pending.is_active());
    /// assert!(ReservationStatus::Received.is_active());
    /// assert!(!ReservationStatus::Cancelled.is_active());
    /// ```
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Whether no further transition is possible out of this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Received | Self::Cancelled)
    }

    /// Whether the state machine permits moving from this status to `to`.
    ///
    /// Allowed transitions: `Pending -> Confirmed`,
    /// `Confirmed -> Received`, and any active status `-> Cancelled`.
    /// Everything else, including any change out of `Cancelled`, is
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use photohold::ReservationStatus::*;
    ///
    /// assert!(Pending.can_transition_to(Confirmed));
    /// assert!(Confirmed.can_transition_to(Received));
    /// assert!(Received.can_transition_to(Cancelled));
    /// assert!(!Received.can_transition_to(Pending));
    /// assert!(!Cancelled.can_transition_to(Pending));
    /// ```
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Confirmed)
                | (Self::Confirmed, Self::Received)
                | (
                    Self::Pending | Self::Confirmed | Self::Received,
                    Self::Cancelled
                )
        )
    }

    /// Returns the statuses from which `to` may legally be reached.
    ///
    /// This is the transition table inverted for use as the conditional
    /// guard of a status update. `Pending` has no legal sources: it is
    /// only ever the initial status of a new record.
    #[must_use]
    pub const fn allowed_sources(to: Self) -> &'static [Self] {
        match to {
            Self::Pending => &[],
            Self::Confirmed => &[Self::Pending],
            Self::Received => &[Self::Confirmed],
            Self::Cancelled => &[Self::Pending, Self::Confirmed, Self::Received],
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored reservation: one user's claim on one photo print.
///
/// The `user_name` and `user_email` fields are a snapshot of the
/// requester's identity at creation time, kept for auditability; they are
/// not live references and are never updated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    photo_id: PhotoId,
    user_id: String,
    user_name: String,
    user_email: String,
    status: ReservationStatus,
    message: Option<String>,
    created_at: SystemTime,
    updated_at: SystemTime,
}

impl Reservation {
    /// Assembles a reservation from its stored parts.
    ///
    /// This is intended for the storage layer when materializing rows;
    /// new reservations are created through
    /// [`ReservationDraft`] and the store's atomic insert.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub(crate) fn from_parts(
        id: ReservationId,
        photo_id: PhotoId,
        user_id: String,
        user_name: String,
        user_email: String,
        status: ReservationStatus,
        message: Option<String>,
        created_at: SystemTime,
        updated_at: SystemTime,
    ) -> Self {
        Self {
            id,
            photo_id,
            user_id,
            user_name,
            user_email,
            status,
            message,
            created_at,
            updated_at,
        }
    }

    /// Returns the storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the reserved photo's identifier.
    #[must_use]
    pub const fn photo_id(&self) -> &PhotoId {
        &self.photo_id
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the owner's name as snapshotted at creation time.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns the owner's email as snapshotted at creation time.
    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the optional free-text note.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Returns the timestamp of the last status or message change.
    #[must_use]
    pub const fn updated_at(&self) -> SystemTime {
        self.updated_at
    }

    /// Whether this reservation currently holds its photo.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether the given user id owns this reservation.
    #[must_use]
    pub fn owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// The data needed to create a new reservation.
///
/// A draft snapshots the requester's identity and carries the optional
/// message. The status is always `Pending` and the id is assigned by the
/// store on insert.
///
/// # Examples
///
/// ```
/// use photohold::{Identity, PhotoId, ReservationDraft};
///
/// let photo = PhotoId::new("gallery-2024/042").unwrap();
/// let requester = Identity::new("u-17", "Maria Keller", "maria@example.org");
///
/// let draft = ReservationDraft::new(photo, &requester)
///     .unwrap()
///     .with_message(Some("Pick up after Sunday service".to_string()));
/// assert_eq!(draft.user_id(), "u-17");
/// ```
#[derive(Debug, Clone)]
pub struct ReservationDraft {
    photo_id: PhotoId,
    user_id: String,
    user_name: String,
    user_email: String,
    message: Option<String>,
    created_at: Option<SystemTime>,
}

impl ReservationDraft {
    /// Creates a draft for the given photo and requester.
    ///
    /// The requester's id, name and email are copied into the draft; the
    /// stored record keeps that snapshot permanently.
    ///
    /// # Errors
    ///
    /// Returns an error if the requester's user id is empty after
    /// trimming.
    pub fn new(photo_id: PhotoId, requester: &Identity) -> Result<Self, ValidationError> {
        let user_id = requester.user_id().trim();
        if user_id.is_empty() {
            return Err(ValidationError {
                field: "user_id".into(),
                message: "user id must be non-empty after trimming whitespace".into(),
            });
        }

        Ok(Self {
            photo_id,
            user_id: user_id.to_string(),
            user_name: requester.user_name().trim().to_string(),
            user_email: requester.user_email().trim().to_string(),
            message: None,
            created_at: None,
        })
    }

    /// Sets the optional message.
    ///
    /// The message is trimmed; an empty or whitespace-only message is
    /// stored as absent.
    #[must_use]
    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        self
    }

    /// Overrides the creation timestamp.
    ///
    /// Defaults to the insertion time when not set; the override exists
    /// for tests that need deterministic timestamps.
    #[must_use]
    pub fn with_created_at(mut self, created_at: SystemTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Returns the photo this draft claims.
    #[must_use]
    pub const fn photo_id(&self) -> &PhotoId {
        &self.photo_id
    }

    /// Returns the requesting user's identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the requester's name snapshot.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns the requester's email snapshot.
    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Returns the optional message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the creation timestamp, defaulting to now.
    #[must_use]
    pub fn created_at_or_now(&self) -> SystemTime {
        self.created_at.unwrap_or_else(SystemTime::now)
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod proptests;
