//! Checkout, payment history, and dashboard handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use remedia_core::{Email, PaymentId, Price};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db::{PaymentRepository, RepositoryError, UserRepository};
use crate::error::AppError;
use crate::middleware::{RequireAdmin, RequireAuth, RequireSeller};
use crate::models::{CheckoutOutcome, CheckoutPayment, Payment};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub email: Email,
}

/// Record a payment and clear the purchased cart entries atomically.
///
/// The two writes run in one database transaction; a failure on either
/// side leaves both the payments and the cart untouched. Submitting the
/// same payload twice records two payments.
pub async fn checkout(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Json(payload): Json<CheckoutPayment>,
) -> Result<Json<CheckoutOutcome>, AppError> {
    let outcome = PaymentRepository::new(state.pool())
        .checkout(&payload)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "checkout transaction aborted");
            AppError::CheckoutFailed
        })?;

    Ok(Json(outcome))
}

/// Create a Stripe payment intent and return its client secret.
pub async fn create_intent(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let price: Price = body
        .get("price")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .ok_or_else(|| AppError::Validation("Invalid price value".to_owned()))?;

    let intent = state.stripe().create_payment_intent(price).await?;
    Ok(Json(json!({ "clientSecret": intent.client_secret })))
}

/// A buyer's own payment history.
pub async fn history(
    RequireAuth(claims): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<Payment>>, AppError> {
    // The cookie identity must match the requested history.
    if claims.email != query.email.as_str() {
        return Err(AppError::Forbidden);
    }

    let payments = PaymentRepository::new(state.pool())
        .list_by_buyer(&query.email)
        .await?;

    Ok(Json(payments))
}

/// Payments addressed to the authenticated seller.
pub async fn seller_history(
    RequireSeller(seller): RequireSeller,
    State(state): State<AppState>,
) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = PaymentRepository::new(state.pool())
        .list_by_seller(&seller.email)
        .await?;

    Ok(Json(payments))
}

/// Every payment on record. Admin only.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = PaymentRepository::new(state.pool()).list_all().await?;
    Ok(Json(payments))
}

/// Transition a pending payment to paid. Admin only.
pub async fn mark_paid(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
) -> Result<Json<Value>, AppError> {
    PaymentRepository::new(state.pool())
        .mark_paid(id)
        .await
        .map_err(|err| match err {
            RepositoryError::NotFound => AppError::NotFound("Payment not found".to_owned()),
            other => other.into(),
        })?;

    Ok(Json(json!({ "message": "Payment status updated successfully" })))
}

/// Marketplace-wide totals for the admin dashboard.
pub async fn admin_dashboard(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let totals = PaymentRepository::new(state.pool()).totals().await?;
    let total_users = UserRepository::new(state.pool()).count().await?;

    Ok(Json(json!({
        "totalPayment": totals.total_payment,
        "totalPrice": totals.total_price,
        "totalUsers": total_users,
    })))
}

/// Paid/pending revenue split for the seller dashboard.
pub async fn seller_dashboard(
    RequireSeller(seller): RequireSeller,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let totals = PaymentRepository::new(state.pool())
        .seller_totals(&seller.email)
        .await?;

    Ok(Json(json!({
        "totalPaid": totals.total_paid,
        "totalPending": totals.total_pending,
    })))
}
