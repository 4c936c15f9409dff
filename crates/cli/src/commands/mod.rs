//! CLI command implementations.

pub mod migrate;
pub mod seed;
pub mod user;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection or query error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Repository-level error.
    #[error("{0}")]
    Repository(#[from] remedia_api::db::RepositoryError),

    /// Invalid listing price.
    #[error("Invalid price: {0}")]
    Price(#[from] remedia_core::PriceError),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: buyer, seller, admin")]
    InvalidRole(String),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// No user record exists for the email.
    #[error("No user found with email: {0}")]
    UserNotFound(String),
}

/// Connect to the marketplace database named by `MARKET_DATABASE_URL`
/// (falling back to `DATABASE_URL`).
pub async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("MARKET_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| CommandError::MissingEnvVar("MARKET_DATABASE_URL"))?;

    Ok(remedia_api::db::create_pool(&database_url).await?)
}
