//! Database operations for the `market` schema.
//!
//! ## Tables
//!
//! - `market.user` - Accounts keyed by email, with role and status
//! - `market.medicine` - Seller-owned catalog listings
//! - `market.cart_item` - Per-email cart entries
//! - `market.payment` - Checkout payments with the cart ids they cleared
//! - `market.category` - Admin-managed catalog categories
//! - `market.advertisement` - Seller advertisement requests and slider state
//!
//! All repositories borrow a [`PgPool`] and use the runtime query API; the
//! only multi-statement transaction is the checkout in
//! [`payments::PaymentRepository::checkout`].
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p remedia-cli -- migrate
//! ```

pub mod advertisements;
pub mod carts;
pub mod categories;
pub mod medicines;
pub mod payments;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use advertisements::AdvertisementRepository;
pub use carts::CartRepository;
pub use categories::CategoryRepository;
pub use medicines::MedicineRepository;
pub use payments::PaymentRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
