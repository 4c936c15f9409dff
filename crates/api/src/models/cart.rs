//! Cart item model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use remedia_core::{CartItemId, Email, MedicineId, Price};

/// A single cart entry.
///
/// Cart items are owned by an email and reference the catalog medicine they
/// were added from. They are destroyed individually or in bulk at checkout.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    /// Owner email.
    pub email: Email,
    pub medicine_id: MedicineId,
    /// Medicine title at the time it was added.
    pub title: String,
    /// Unit price at the time it was added.
    pub price: Price,
    pub created_at: DateTime<Utc>,
}

/// Payload for adding an item to a cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub email: Email,
    pub medicine_id: MedicineId,
    pub title: String,
    pub price: Price,
}
