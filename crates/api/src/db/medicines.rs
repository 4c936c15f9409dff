//! Catalog repository for database operations.

use sqlx::PgPool;

use remedia_core::{Email, MedicineId};

use super::RepositoryError;
use crate::models::{Medicine, NewMedicine};

/// Sort order for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceSort {
    #[default]
    Ascending,
    Descending,
}

/// Repository for catalog database operations.
pub struct MedicineRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MedicineRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List listings, optionally filtered by a case-insensitive title
    /// search, sorted by price.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        search: Option<&str>,
        sort: PriceSort,
    ) -> Result<Vec<Medicine>, RepositoryError> {
        // The pattern parameter doubles as the filter toggle: NULL matches
        // every row.
        let pattern = search.map(|s| format!("%{s}%"));

        let query = match sort {
            PriceSort::Ascending => {
                r"
                SELECT id, title, category, price, discount, seller_email, created_at
                FROM market.medicine
                WHERE $1::text IS NULL OR title ILIKE $1
                ORDER BY price ASC
                "
            }
            PriceSort::Descending => {
                r"
                SELECT id, title, category, price, discount, seller_email, created_at
                FROM market.medicine
                WHERE $1::text IS NULL OR title ILIKE $1
                ORDER BY price DESC
                "
            }
        };

        let medicines = sqlx::query_as::<_, Medicine>(query)
            .bind(pattern)
            .fetch_all(self.pool)
            .await?;

        Ok(medicines)
    }

    /// Get a listing by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: MedicineId) -> Result<Option<Medicine>, RepositoryError> {
        let medicine = sqlx::query_as::<_, Medicine>(
            r"
            SELECT id, title, category, price, discount, seller_email, created_at
            FROM market.medicine
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(medicine)
    }

    /// Create a listing for a seller.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        seller_email: &Email,
        medicine: &NewMedicine,
    ) -> Result<Medicine, RepositoryError> {
        let medicine = sqlx::query_as::<_, Medicine>(
            r"
            INSERT INTO market.medicine (title, category, price, discount, seller_email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, category, price, discount, seller_email, created_at
            ",
        )
        .bind(&medicine.title)
        .bind(&medicine.category)
        .bind(medicine.price)
        .bind(medicine.discount)
        .bind(seller_email)
        .fetch_one(self.pool)
        .await?;

        Ok(medicine)
    }

    /// List a seller's own listings, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_seller(
        &self,
        seller_email: &Email,
    ) -> Result<Vec<Medicine>, RepositoryError> {
        let medicines = sqlx::query_as::<_, Medicine>(
            r"
            SELECT id, title, category, price, discount, seller_email, created_at
            FROM market.medicine
            WHERE seller_email = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(seller_email)
        .fetch_all(self.pool)
        .await?;

        Ok(medicines)
    }

    /// Delete a seller's own listing.
    ///
    /// The seller email scopes the delete; a seller cannot remove another
    /// seller's listing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no matching listing exists.
    pub async fn delete(
        &self,
        id: MedicineId,
        seller_email: &Email,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "DELETE FROM market.medicine WHERE id = $1 AND seller_email = $2",
        )
        .bind(id)
        .bind(seller_email)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete any listing regardless of owner. Admin oversight only; the
    /// seller-facing path is [`Self::delete`].
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no listing has that id.
    pub async fn delete_any(&self, id: MedicineId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM market.medicine WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
