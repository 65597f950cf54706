//! Requester identity and the authentication collaborator seam.
//!
//! The reservation core does not manage users or sessions. It consumes an
//! [`Identity`] produced by an [`AuthProvider`] collaborator and treats the
//! admin flag as an opaque boolean supplied by that collaborator. Privilege
//! is never re-derived inside the library; every admin-gated operation goes
//! through the same check against `Identity::is_admin`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The authenticated requester of an operation.
///
/// The name and email are snapshotted onto reservation rows at creation
/// time. A later rename of the user does not retroactively change
/// historical reservations.
///
/// # Examples
///
/// ```
/// use photohold::Identity;
///
/// let user = Identity::new("u-17", "Maria Keller", "maria@example.org");
/// assert!(!user.is_admin());
///
/// let admin = Identity::new("u-1", "Office", "office@example.org").into_admin();
/// assert!(admin.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    user_id: String,
    user_name: String,
    user_email: String,
    is_admin: bool,
}

impl Identity {
    /// Creates a non-admin identity.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        user_email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            user_email: user_email.into(),
            is_admin: false,
        }
    }

    /// Marks this identity as carrying admin privilege.
    ///
    /// The flag is supplied by the authentication collaborator; the
    /// library only consumes it.
    #[must_use]
    pub fn into_admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the display name at the time the identity was issued.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns the email address at the time the identity was issued.
    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Returns whether this identity carries admin privilege.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Fails with `PermissionDenied` unless this identity is an admin.
    ///
    /// This is the single choke point for privilege checks; `operation`
    /// names the attempted action in the error detail.
    ///
    /// # Errors
    ///
    /// Returns `Error::PermissionDenied` for non-admin identities.
    pub fn require_admin(&self, operation: &str) -> Result<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(Error::PermissionDenied {
                details: format!("{operation} requires admin privilege"),
            })
        }
    }
}

/// Source of the current requester's identity.
///
/// Implementations wrap whatever session mechanism the surrounding
/// application uses. The CLI ships an environment-backed implementation;
/// tests use a mock.
pub trait AuthProvider {
    /// Returns the identity of the current requester.
    ///
    /// # Errors
    ///
    /// Returns `Error::AuthenticationRequired` when no session is present.
    fn current_user(&self) -> Result<Identity>;
}

/// An `AuthProvider` that always returns a fixed identity.
///
/// Useful for embedding the library where the caller has already resolved
/// the session, and as a test fixture.
#[derive(Debug, Clone)]
pub struct StaticAuthProvider {
    identity: Identity,
}

impl StaticAuthProvider {
    /// Creates a provider that returns the given identity.
    #[must_use]
    pub const fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

impl AuthProvider for StaticAuthProvider {
    fn current_user(&self) -> Result<Identity> {
        Ok(self.identity.clone())
    }
}
