//! Advertisement handlers.
//!
//! Sellers submit advertisements for their listings; the public list feeds
//! the homepage; an admin decides which entries join the slider.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use remedia_core::AdvertisementId;
use serde_json::{Value, json};

use crate::db::{AdvertisementRepository, RepositoryError};
use crate::error::AppError;
use crate::middleware::{RequireAdmin, RequireSeller};
use crate::models::{Advertisement, NewAdvertisement, SlideToggle};
use crate::state::AppState;

/// Submit an advertisement for the authenticated seller.
pub async fn create(
    RequireSeller(seller): RequireSeller,
    State(state): State<AppState>,
    Json(payload): Json<NewAdvertisement>,
) -> Result<(StatusCode, Json<Advertisement>), AppError> {
    let advertisement = AdvertisementRepository::new(state.pool())
        .create(&seller.email, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(advertisement)))
}

/// Public advertisement list.
pub async fn index(
    State(state): State<AppState>,
) -> Result<Json<Vec<Advertisement>>, AppError> {
    let advertisements = AdvertisementRepository::new(state.pool()).list().await?;
    Ok(Json(advertisements))
}

/// Toggle an advertisement's slider membership. Admin only.
pub async fn toggle_slide(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<AdvertisementId>,
    Json(payload): Json<SlideToggle>,
) -> Result<Json<Value>, AppError> {
    AdvertisementRepository::new(state.pool())
        .set_in_slide(id, payload.in_slide)
        .await
        .map_err(|err| match err {
            RepositoryError::NotFound => {
                AppError::NotFound("Advertisement not found".to_owned())
            }
            other => other.into(),
        })?;

    Ok(Json(
        json!({ "message": "Advertisement status updated successfully" }),
    ))
}
