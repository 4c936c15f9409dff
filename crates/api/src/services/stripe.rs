//! Stripe payment-intent client.
//!
//! Covers the single contract the marketplace needs: create a payment
//! intent for an amount in cents and hand the client secret back to the
//! frontend, which completes the card flow against Stripe directly.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use remedia_core::{Price, PriceError};

/// Stripe API base URL.
const BASE_URL: &str = "https://api.stripe.com/v1";

/// Errors that can occur when interacting with the Stripe API.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: StatusCode, message: String },

    /// The amount cannot be expressed in cents.
    #[error("invalid amount: {0}")]
    Amount(#[from] PriceError),
}

/// A created payment intent, reduced to what the frontend consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Stripe API client.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    secret_key: SecretString,
}

impl StripeClient {
    /// Create a new Stripe client.
    #[must_use]
    pub fn new(secret_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
        }
    }

    /// Create a card payment intent in USD.
    ///
    /// # Errors
    ///
    /// Returns `StripeError::Amount` when the price does not convert to
    /// cents, `StripeError::Api` on a non-success response, and
    /// `StripeError::Http` when the request itself fails.
    pub async fn create_payment_intent(&self, price: Price) -> Result<PaymentIntent, StripeError> {
        let amount = price.to_cents()?;

        let response = self
            .client
            .post(format!("{BASE_URL}/payment_intents"))
            .bearer_auth(self.secret_key.expose_secret())
            .form(&[
                ("amount", amount.to_string().as_str()),
                ("currency", "usd"),
                ("payment_method_types[]", "card"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StripeError::Api { status, message });
        }

        Ok(response.json::<PaymentIntent>().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_intent_deserializes_stripe_shape() {
        // Stripe responses carry many more fields; only these two matter here
        let json = r#"{
            "id": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
            "object": "payment_intent",
            "amount": 1500,
            "client_secret": "pi_3MtwBwLkdIwHu7ix28a3tqPa_secret_YrKJUKribcBjcG8HVhfZluoGH",
            "currency": "usd",
            "status": "requires_payment_method"
        }"#;

        let intent: PaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.id, "pi_3MtwBwLkdIwHu7ix28a3tqPa");
        assert!(intent.client_secret.starts_with("pi_"));
    }
}
