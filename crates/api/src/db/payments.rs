//! Payment repository: checkout transaction and payment lifecycle.

use rust_decimal::Decimal;
use sqlx::PgPool;

use remedia_core::{Email, PaymentId};

use super::RepositoryError;
use crate::models::payment::{CheckoutOutcome, CheckoutPayment, DeleteResult, Payment};

/// Totals across all payments, for the admin dashboard.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct PaymentTotals {
    pub total_payment: i64,
    pub total_price: Decimal,
}

/// Per-seller totals split by status, for the seller dashboard.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct SellerTotals {
    pub total_paid: Decimal,
    pub total_pending: Decimal,
}

/// Repository for payment database operations.
pub struct PaymentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PaymentRepository<'a> {
    /// Create a new payment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a payment and clear the purchased cart entries atomically.
    ///
    /// Inside one transaction: the payment row is inserted first, then
    /// every cart item whose id is in `payment.cart_ids` is deleted, then
    /// the transaction commits. Either both effects are durably applied or
    /// neither is; any failure rolls the transaction back completely.
    ///
    /// Deleting an id that no longer exists is a no-op, which is why
    /// re-submitting the same payload after a commit records a second
    /// payment instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` when any statement or the commit
    /// fails; no partial state remains.
    pub async fn checkout(
        &self,
        payment: &CheckoutPayment,
    ) -> Result<CheckoutOutcome, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, Payment>(
            r"
            INSERT INTO market.payment (id, email, seller_email, price, status, cart_ids)
            VALUES (COALESCE($1, gen_random_uuid()), $2, $3, $4, $5, $6)
            RETURNING id, email, seller_email, price, status, cart_ids, created_at
            ",
        )
        .bind(payment.id)
        .bind(&payment.email)
        .bind(&payment.seller_email)
        .bind(payment.price)
        .bind(payment.status)
        .bind(&payment.cart_ids)
        .fetch_one(&mut *tx)
        .await?;

        let deleted = sqlx::query("DELETE FROM market.cart_item WHERE id = ANY($1)")
            .bind(&payment.cart_ids)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(CheckoutOutcome {
            payment_result: inserted,
            delete_result: DeleteResult {
                deleted_count: deleted.rows_affected(),
            },
        })
    }

    /// Transition a payment's status to `paid`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no payment has that id.
    pub async fn mark_paid(&self, id: PaymentId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE market.payment SET status = 'paid' WHERE id = $1",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// List a buyer's payment history, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_buyer(&self, email: &Email) -> Result<Vec<Payment>, RepositoryError> {
        let payments = sqlx::query_as::<_, Payment>(
            r"
            SELECT id, email, seller_email, price, status, cart_ids, created_at
            FROM market.payment
            WHERE email = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(email)
        .fetch_all(self.pool)
        .await?;

        Ok(payments)
    }

    /// List payments addressed to a seller, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_seller(
        &self,
        seller_email: &Email,
    ) -> Result<Vec<Payment>, RepositoryError> {
        let payments = sqlx::query_as::<_, Payment>(
            r"
            SELECT id, email, seller_email, price, status, cart_ids, created_at
            FROM market.payment
            WHERE seller_email = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(seller_email)
        .fetch_all(self.pool)
        .await?;

        Ok(payments)
    }

    /// List all payments, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Payment>, RepositoryError> {
        let payments = sqlx::query_as::<_, Payment>(
            r"
            SELECT id, email, seller_email, price, status, cart_ids, created_at
            FROM market.payment
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(payments)
    }

    /// Payment count and revenue across the whole marketplace.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn totals(&self) -> Result<PaymentTotals, RepositoryError> {
        let totals = sqlx::query_as::<_, PaymentTotals>(
            r"
            SELECT COUNT(*) AS total_payment,
                   COALESCE(SUM(price), 0) AS total_price
            FROM market.payment
            ",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(totals)
    }

    /// A seller's paid and pending revenue.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn seller_totals(
        &self,
        seller_email: &Email,
    ) -> Result<SellerTotals, RepositoryError> {
        let totals = sqlx::query_as::<_, SellerTotals>(
            r"
            SELECT COALESCE(SUM(price) FILTER (WHERE status = 'paid'), 0) AS total_paid,
                   COALESCE(SUM(price) FILTER (WHERE status = 'pending'), 0) AS total_pending
            FROM market.payment
            WHERE seller_email = $1
            ",
        )
        .bind(seller_email)
        .fetch_one(self.pool)
        .await?;

        Ok(totals)
    }
}
