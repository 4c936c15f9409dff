//! User repository for database operations.

use sqlx::PgPool;

use remedia_core::{Email, Role, UserStatus};

use super::RepositoryError;
use crate::models::User;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            SELECT id, email, role, status, created_at, updated_at
            FROM market.user
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new user with the given role and status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        role: Role,
        status: UserStatus,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            INSERT INTO market.user (email, role, status)
            VALUES ($1, $2, $3)
            RETURNING id, email, role, status, created_at, updated_at
            ",
        )
        .bind(email)
        .bind(role)
        .bind(status)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(user)
    }

    /// Update a user's status (seller requests).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has that email.
    pub async fn update_status(
        &self,
        email: &Email,
        status: UserStatus,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            UPDATE market.user
            SET status = $2, updated_at = now()
            WHERE email = $1
            RETURNING id, email, role, status, created_at, updated_at
            ",
        )
        .bind(email)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(user)
    }

    /// Update a user's role and/or status (admin-driven transition).
    ///
    /// `None` leaves the corresponding field unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has that email.
    pub async fn update_role_status(
        &self,
        email: &Email,
        role: Option<Role>,
        status: Option<UserStatus>,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            UPDATE market.user
            SET role = COALESCE($2, role),
                status = COALESCE($3, status),
                updated_at = now()
            WHERE email = $1
            RETURNING id, email, role, status, created_at, updated_at
            ",
        )
        .bind(email)
        .bind(role)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(user)
    }

    /// List all users, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = sqlx::query_as::<_, User>(
            r"
            SELECT id, email, role, status, created_at, updated_at
            FROM market.user
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Count all users.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM market.user")
            .fetch_one(self.pool)
            .await?;

        Ok(count.0)
    }
}
