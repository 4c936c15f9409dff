//! Payment model and checkout payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use remedia_core::{CartItemId, Email, PaymentId, PaymentStatus, Price};

/// A recorded payment.
///
/// Created at checkout with status `pending`; an admin later marks it
/// `paid`. The row is otherwise immutable. `cart_ids` preserves which cart
/// entries were cleared by the purchase.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    /// Buyer email.
    pub email: Email,
    pub seller_email: Email,
    pub price: Price,
    pub status: PaymentStatus,
    /// Cart entries cleared by this purchase.
    pub cart_ids: Vec<CartItemId>,
    pub created_at: DateTime<Utc>,
}

/// Checkout payload: one payment plus the cart entries it clears.
///
/// Checkout is not idempotent. Re-submitting the same payload after a
/// successful commit records a second payment while the deletions no-op;
/// callers are responsible for at-most-once submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayment {
    /// Explicit payment id; generated when absent.
    #[serde(default)]
    pub id: Option<PaymentId>,
    /// Buyer email.
    pub email: Email,
    pub seller_email: Email,
    pub price: Price,
    /// Initial status; defaults to `pending`.
    #[serde(default)]
    pub status: PaymentStatus,
    /// Cart entries to clear.
    pub cart_ids: Vec<CartItemId>,
}

/// Result of a committed checkout transaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOutcome {
    /// The inserted payment row.
    pub payment_result: Payment,
    /// How many cart entries the transaction removed.
    pub delete_result: DeleteResult,
}

/// Deletion summary within a checkout.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}
