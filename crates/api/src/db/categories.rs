//! Category repository for database operations.

use sqlx::PgPool;

use remedia_core::CategoryId;

use super::RepositoryError;
use crate::models::{Category, NewCategory, UpdateCategory};

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r"
            INSERT INTO market.category (name, image_url)
            VALUES ($1, $2)
            RETURNING id, name, image_url, created_at
            ",
        )
        .bind(&category.name)
        .bind(&category.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    /// List all categories, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, image_url, created_at
            FROM market.category
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a category by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, image_url, created_at
            FROM market.category
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Apply a partial update; `None` fields keep their stored value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has that id.
    pub async fn update(
        &self,
        id: CategoryId,
        update: &UpdateCategory,
    ) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r"
            UPDATE market.category
            SET name = COALESCE($2, name),
                image_url = COALESCE($3, image_url)
            WHERE id = $1
            RETURNING id, name, image_url, created_at
            ",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.image_url)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(category)
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has that id.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM market.category WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
