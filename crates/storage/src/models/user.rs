//! User domain type.

use chrono::NaiveDateTime;

use ladle_core::{UserId, UserRole};

/// An application account (domain type).
///
/// `password_hash` is always the bcrypt output, never the plaintext; see
/// [`crate::auth`].
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name, unique across the table.
    pub username: String,
    /// bcrypt hash of the user's password.
    pub password_hash: String,
    /// Permission level.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: NaiveDateTime,
    /// When the user was last updated.
    pub updated_at: NaiveDateTime,
}

impl User {
    /// Whether this account has the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
