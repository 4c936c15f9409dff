//! Catalog medicine model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use remedia_core::{Email, MedicineId, Price};

/// A catalog listing owned by a seller.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: MedicineId,
    pub title: String,
    pub category: String,
    pub price: Price,
    /// Percentage discount; zero when the listing is not discounted.
    pub discount: Decimal,
    pub seller_email: Email,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a listing.
///
/// The seller email is taken from the authenticated seller, never from the
/// request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicine {
    pub title: String,
    pub category: String,
    pub price: Price,
    #[serde(default)]
    pub discount: Decimal,
}
