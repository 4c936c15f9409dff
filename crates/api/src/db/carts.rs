//! Cart repository for database operations.

use sqlx::PgPool;

use remedia_core::{CartItemId, Email};

use super::RepositoryError;
use crate::models::{CartItem, NewCartItem};

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add an item to a cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(&self, item: &NewCartItem) -> Result<CartItem, RepositoryError> {
        let item = sqlx::query_as::<_, CartItem>(
            r"
            INSERT INTO market.cart_item (email, medicine_id, title, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, medicine_id, title, price, created_at
            ",
        )
        .bind(&item.email)
        .bind(item.medicine_id)
        .bind(&item.title)
        .bind(item.price)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    /// List cart items owned by an email, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_email(&self, email: &Email) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(
            r"
            SELECT id, email, medicine_id, title, price, created_at
            FROM market.cart_item
            WHERE email = $1
            ORDER BY created_at
            ",
        )
        .bind(email)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Delete a single cart item by id.
    ///
    /// Returns the number of rows removed (0 when the id did not exist;
    /// deleting an already-deleted id is a tolerated no-op).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: CartItemId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM market.cart_item WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
