//! Session token service.
//!
//! Issues and verifies the signed session credential (an HS256 JWT) that the
//! HTTP layer stores in the `token` cookie. Tokens are valid for 365 days
//! from issuance and are never persisted server-side: validity is purely
//! cryptographic plus expiry. There is no revocation list, so logout only
//! clears the cookie and a captured token stays valid until it expires.
//! This is a known limitation of the contract, not an oversight.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use remedia_core::Email;

/// How long an issued token stays valid.
pub const TOKEN_TTL_DAYS: i64 = 365;

/// Errors from the token service.
///
/// Verification failures are deliberately collapsed into a single variant:
/// callers must treat missing, malformed, expired, and signature-invalid
/// tokens as one 401-equivalent outcome, never distinguished.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing the claims failed.
    #[error("failed to sign session token: {0}")]
    Signing(jsonwebtoken::errors::Error),

    /// The token is missing, malformed, expired, or signature-invalid.
    #[error("invalid session token")]
    Invalid,
}

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The identity the client authenticated as.
    pub email: String,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

/// Issues and verifies session tokens with a server-held secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Create a token service from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    /// Issue a signed token for an identity, expiring in 365 days.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if encoding fails.
    pub fn issue(&self, email: &Email) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            email: email.as_str().to_owned(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Validate a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] for every failure mode.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&SecretString::from(secret.to_owned()))
    }

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_issue_then_verify_round_trip() {
        let tokens = service("k9#mQ2$vX7@pL4!nR8&wZ1*jT5^cF3%d");
        let token = tokens.issue(&email("user@example.com")).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.email, "user@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_expired_token_fails() {
        let tokens = service("k9#mQ2$vX7@pL4!nR8&wZ1*jT5^cF3%d");

        // Expired well past the default validation leeway
        let now = Utc::now().timestamp();
        let claims = Claims {
            email: "user@example.com".to_owned(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::default(), &claims, &tokens.encoding).unwrap();

        assert!(matches!(tokens.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_tampered_token_fails() {
        let tokens = service("k9#mQ2$vX7@pL4!nR8&wZ1*jT5^cF3%d");
        let token = tokens.issue(&email("user@example.com")).unwrap();

        // Corrupt the signature segment
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(matches!(tokens.verify(&tampered), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_wrong_secret_fails() {
        let issuer = service("k9#mQ2$vX7@pL4!nR8&wZ1*jT5^cF3%d");
        let verifier = service("f6!bN3@hV8#sD1$gK5%mP9^qW2&xY4*z");

        let token = issuer.issue(&email("user@example.com")).unwrap();
        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_garbage_fails() {
        let tokens = service("k9#mQ2$vX7@pL4!nR8&wZ1*jT5^cF3%d");
        assert!(matches!(
            tokens.verify("not-a-token"),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(tokens.verify(""), Err(TokenError::Invalid)));
    }
}
