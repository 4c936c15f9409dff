//! Advertisement repository for database operations.

use sqlx::PgPool;

use remedia_core::{AdvertisementId, Email};

use super::RepositoryError;
use crate::models::{Advertisement, NewAdvertisement};

/// Repository for advertisement database operations.
pub struct AdvertisementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdvertisementRepository<'a> {
    /// Create a new advertisement repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Submit an advertisement for a seller. New rows start out of the
    /// slider.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        seller_email: &Email,
        advertisement: &NewAdvertisement,
    ) -> Result<Advertisement, RepositoryError> {
        let advertisement = sqlx::query_as::<_, Advertisement>(
            r"
            INSERT INTO market.advertisement (seller_email, title, description, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, seller_email, title, description, image_url, in_slide, created_at
            ",
        )
        .bind(seller_email)
        .bind(&advertisement.title)
        .bind(&advertisement.description)
        .bind(&advertisement.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(advertisement)
    }

    /// List all advertisements, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Advertisement>, RepositoryError> {
        let advertisements = sqlx::query_as::<_, Advertisement>(
            r"
            SELECT id, seller_email, title, description, image_url, in_slide, created_at
            FROM market.advertisement
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(advertisements)
    }

    /// Set whether the advertisement appears in the slider.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no advertisement has that id.
    pub async fn set_in_slide(
        &self,
        id: AdvertisementId,
        in_slide: bool,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE market.advertisement SET in_slide = $2 WHERE id = $1")
            .bind(id)
            .bind(in_slide)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
