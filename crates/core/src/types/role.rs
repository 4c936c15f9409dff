//! Role and status enums for marketplace entities.

use serde::{Deserialize, Serialize};

/// Marketplace role with different permission levels.
///
/// New accounts start out as [`Role::Unset`] until an admin promotes them.
/// Role-gated handlers compare the persisted role exactly; there is no
/// hierarchy (an admin is not implicitly a seller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "market.user_role", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular customer: browse, cart, checkout.
    Buyer,
    /// Catalog owner: manage own listings, view own sales.
    Seller,
    /// Full access including user and payment management.
    Admin,
    /// No role assigned yet.
    #[default]
    Unset,
}

impl Role {
    /// The role name as stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Admin => "admin",
            Self::Unset => "unset",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            "admin" => Ok(Self::Admin),
            "unset" => Ok(Self::Unset),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Account status for users.
///
/// `Requested` marks a buyer who has asked to become a seller; the request
/// is resolved by an admin through a role update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "market.user_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Requested,
}

/// Payment lifecycle status.
///
/// Payments are created `Pending` at checkout and move to `Paid` through a
/// single admin action; no other transition exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "market.payment_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"seller\"").unwrap(),
            Role::Seller
        );
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("buyer".parse::<Role>().unwrap(), Role::Buyer);
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_default_is_unset() {
        assert_eq!(Role::default(), Role::Unset);
    }

    #[test]
    fn test_payment_status_serde() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentStatus>("\"paid\"").unwrap(),
            PaymentStatus::Paid
        );
    }

    #[test]
    fn test_user_status_serde() {
        assert_eq!(
            serde_json::from_str::<UserStatus>("\"requested\"").unwrap(),
            UserStatus::Requested
        );
    }
}
