//! User account handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use remedia_core::{Email, Role, UserStatus};
use serde::Deserialize;

use crate::db::{RepositoryError, UserRepository};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::User;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUser {
    pub email: Email,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

/// Upsert a user by email.
///
/// Called on every frontend login. A first login creates the record with
/// the default role; later logins return the stored record unchanged. When
/// the payload carries `status: "requested"` the stored status is updated,
/// which is how a buyer asks to become a seller.
pub async fn upsert(
    State(state): State<AppState>,
    Json(payload): Json<UpsertUser>,
) -> Result<Json<User>, AppError> {
    let repo = UserRepository::new(state.pool());

    if let Some(existing) = repo.get_by_email(&payload.email).await? {
        let user = match payload.status {
            Some(status) if status != existing.status => {
                repo.update_status(&payload.email, status).await?
            }
            _ => existing,
        };
        return Ok(Json(user));
    }

    match repo
        .create(&payload.email, Role::Unset, UserStatus::Active)
        .await
    {
        Ok(user) => Ok(Json(user)),
        // Concurrent first logins race on the unique email; the loser reads
        // the winner's row.
        Err(RepositoryError::Conflict(_)) => {
            let user = repo
                .get_by_email(&payload.email)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_owned()))?;
            Ok(Json(user))
        }
        Err(err) => Err(err.into()),
    }
}

/// Look up a user's profile by email.
pub async fn show(
    State(state): State<AppState>,
    Path(email): Path<Email>,
) -> Result<Json<User>, AppError> {
    let user = UserRepository::new(state.pool())
        .get_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_owned()))?;

    Ok(Json(user))
}

/// List every user. Admin only.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserRepository::new(state.pool()).list_all().await?;
    Ok(Json(users))
}

/// Update a user's role and/or status. Admin only.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(email): Path<Email>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<User>, AppError> {
    let user = UserRepository::new(state.pool())
        .update_role_status(&email, payload.role, payload.status)
        .await
        .map_err(|err| match err {
            RepositoryError::NotFound => AppError::NotFound("User not found".to_owned()),
            other => other.into(),
        })?;

    Ok(Json(user))
}
