//! User model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use remedia_core::{Email, Role, UserId, UserStatus};

/// A marketplace user.
///
/// Users are created on first login by email upsert; the email is the
/// natural key for every other collection (cart items, payments).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Database key.
    pub id: UserId,
    /// Unique login email.
    pub email: Email,
    /// Assigned marketplace role.
    pub role: Role,
    /// Account status (`requested` marks a pending seller request).
    pub status: UserStatus,
    /// When the account was first seen.
    pub created_at: DateTime<Utc>,
    /// Last role/status change.
    pub updated_at: DateTime<Utc>,
}
