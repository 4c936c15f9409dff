//! Database migration command.
//!
//! Applies the embedded `market` schema migrations. The API server never
//! migrates on startup; this command is the only migration path outside the
//! test harness.
//!
//! # Environment Variables
//!
//! - `MARKET_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use super::{CommandError, connect};

/// Run the marketplace database migrations.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running marketplace migrations...");
    remedia_api::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
