//! Catalog listing handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use remedia_core::MedicineId;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db::{MedicineRepository, RepositoryError, medicines::PriceSort};
use crate::error::AppError;
use crate::middleware::{RequireAdmin, RequireSeller};
use crate::models::{Medicine, NewMedicine};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl CatalogQuery {
    fn price_sort(&self) -> PriceSort {
        match self.sort.as_deref() {
            Some("desc") => PriceSort::Descending,
            _ => PriceSort::Ascending,
        }
    }
}

/// Public catalog listing with optional title search and price sort.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Medicine>>, AppError> {
    let medicines = MedicineRepository::new(state.pool())
        .list(query.search.as_deref(), query.price_sort())
        .await?;

    Ok(Json(medicines))
}

/// Public listing detail.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<MedicineId>,
) -> Result<Json<Medicine>, AppError> {
    let medicine = MedicineRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Medicine not found".to_owned()))?;

    Ok(Json(medicine))
}

/// Add a listing for the authenticated seller.
pub async fn create(
    RequireSeller(seller): RequireSeller,
    State(state): State<AppState>,
    Json(payload): Json<NewMedicine>,
) -> Result<(StatusCode, Json<Medicine>), AppError> {
    let medicine = MedicineRepository::new(state.pool())
        .create(&seller.email, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(medicine)))
}

/// List the authenticated seller's own listings.
pub async fn mine(
    RequireSeller(seller): RequireSeller,
    State(state): State<AppState>,
) -> Result<Json<Vec<Medicine>>, AppError> {
    let medicines = MedicineRepository::new(state.pool())
        .list_by_seller(&seller.email)
        .await?;

    Ok(Json(medicines))
}

/// Delete one of the authenticated seller's listings.
///
/// The delete is scoped to the seller's own rows, so a valid id owned by
/// another seller reads as not found.
pub async fn remove(
    RequireSeller(seller): RequireSeller,
    State(state): State<AppState>,
    Path(id): Path<MedicineId>,
) -> Result<Json<Value>, AppError> {
    MedicineRepository::new(state.pool())
        .delete(id, &seller.email)
        .await
        .map_err(|err| match err {
            RepositoryError::NotFound => AppError::NotFound("Medicine not found".to_owned()),
            other => other.into(),
        })?;

    Ok(Json(json!({ "success": true })))
}

/// Full catalog listing for admin oversight.
pub async fn admin_index(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Medicine>>, AppError> {
    let medicines = MedicineRepository::new(state.pool())
        .list(None, PriceSort::Ascending)
        .await?;

    Ok(Json(medicines))
}

/// Delete any listing regardless of owner. Admin oversight only.
pub async fn admin_remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<MedicineId>,
) -> Result<Json<Value>, AppError> {
    MedicineRepository::new(state.pool())
        .delete_any(id)
        .await
        .map_err(|err| match err {
            RepositoryError::NotFound => AppError::NotFound("Medicine not found".to_owned()),
            other => other.into(),
        })?;

    Ok(Json(json!({ "success": true })))
}
