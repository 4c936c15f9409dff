//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::MarketConfig;
use crate::services::stripe::StripeClient;
use crate::services::token::TokenService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MarketConfig,
    pool: PgPool,
    tokens: TokenService,
    stripe: StripeClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Marketplace configuration
    /// * `pool` - `PostgreSQL` connection pool
    #[must_use]
    pub fn new(config: MarketConfig, pool: PgPool) -> Self {
        let tokens = TokenService::new(&config.token_secret);
        let stripe = StripeClient::new(config.stripe_secret_key.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                tokens,
                stripe,
            }),
        }
    }

    /// Get a reference to the marketplace configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the session token service.
    #[must_use]
    pub fn tokens(&self) -> &TokenService {
        &self.inner.tokens
    }

    /// Get a reference to the Stripe payment-intent client.
    #[must_use]
    pub fn stripe(&self) -> &StripeClient {
        &self.inner.stripe
    }
}
