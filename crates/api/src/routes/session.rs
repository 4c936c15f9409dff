//! Session establishment and teardown.
//!
//! Callers authenticate against the identity provider on the frontend and
//! then exchange the resulting identity for a signed session cookie here.
//! The cookie is the only credential the rest of the API accepts.

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use remedia_core::types::Email;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::middleware::{removal_cookie, session_cookie};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub email: Email,
}

/// Issue a session cookie for the supplied identity.
pub async fn start(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = state
        .tokens()
        .issue(&request.email)
        .map_err(|err| AppError::Internal(format!("failed to sign session token: {err}")))?;

    let jar = jar.add(session_cookie(state.config().environment, token));
    Ok((jar, Json(json!({ "success": true }))))
}

/// Clear the session cookie.
pub async fn end(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(removal_cookie(state.config().environment));
    (jar, Json(json!({ "success": true })))
}
