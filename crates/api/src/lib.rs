//! Remedia API library.
//!
//! This crate provides the marketplace service as a library, allowing it to
//! be tested and reused by the CLI and the integration-test harness.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

/// Embedded SQL migrations for the `market` schema.
///
/// Run via the CLI (`remedia migrate`) or from the test harness; the server
/// never applies migrations implicitly on startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
