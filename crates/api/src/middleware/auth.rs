//! Authentication extractors.
//!
//! Provides extractors for requiring a verified session and, on top of it,
//! an exact persisted role. The role extractors compose [`RequireAuth`]
//! internally, so a role check can never run without verified claims - a
//! request with no usable credential fails closed before the user lookup.
//!
//! Both missing-credential and wrong-role rejections answer 401 with the
//! same body, matching the API contract (see `error.rs`).

use axum::{
    Json,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde_json::json;

use remedia_core::{Email, Role};

use crate::db::UserRepository;
use crate::middleware::session::TOKEN_COOKIE;
use crate::models::User;
use crate::services::token::Claims;
use crate::state::AppState;

/// Rejection for the authentication extractors.
#[derive(Debug)]
pub enum AuthRejection {
    /// Missing, malformed, expired, or signature-invalid credential.
    Unauthenticated,
    /// Verified claims but no user record or wrong role.
    Forbidden,
    /// The role lookup itself failed.
    Internal,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            // Both auth failure modes share one status and body
            Self::Unauthenticated | Self::Forbidden => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Unauthorized access" })),
            )
                .into_response(),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response(),
        }
    }
}

/// Extractor that requires a verified session token.
///
/// Reads the `token` cookie and verifies it through the token service.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(claims): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", claims.email)
/// }
/// ```
pub struct RequireAuth(pub Claims);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(TOKEN_COOKIE)
            .ok_or(AuthRejection::Unauthenticated)?;

        let claims = state
            .tokens()
            .verify(token.value())
            .map_err(|_| AuthRejection::Unauthenticated)?;

        Ok(Self(claims))
    }
}

/// Extractor that requires the `admin` role.
///
/// Verifies the session first, then loads the user record by the claims'
/// email and requires `role == admin` exactly. The resolved record is
/// available to the handler.
pub struct RequireAdmin(pub User);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = require_role(parts, state, Role::Admin).await?;
        Ok(Self(user))
    }
}

/// Extractor that requires the `seller` role.
///
/// Same contract as [`RequireAdmin`] with `role == seller`.
pub struct RequireSeller(pub User);

impl<S> FromRequestParts<S> for RequireSeller
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = require_role(parts, state, Role::Seller).await?;
        Ok(Self(user))
    }
}

/// Verify the session, resolve the user record, and compare the role.
async fn require_role<S>(
    parts: &mut Parts,
    state: &S,
    role: Role,
) -> Result<User, AuthRejection>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let RequireAuth(claims) = RequireAuth::from_request_parts(parts, state).await?;
    let state = AppState::from_ref(state);

    // A token can carry an email no user record exists for; that denies
    // like any wrong role
    let email = Email::parse(&claims.email).map_err(|_| AuthRejection::Forbidden)?;

    let user = UserRepository::new(state.pool())
        .get_by_email(&email)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "role lookup failed");
            AuthRejection::Internal
        })?
        .ok_or(AuthRejection::Forbidden)?;

    if user.role != role {
        return Err(AuthRejection::Forbidden);
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_share_unauthorized_status() {
        let unauthenticated = AuthRejection::Unauthenticated.into_response();
        let forbidden = AuthRejection::Forbidden.into_response();

        assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(forbidden.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_rejection_is_500() {
        let response = AuthRejection::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
