//! Catalog category handlers. Admin only.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use remedia_core::CategoryId;
use serde_json::{Value, json};

use crate::db::{CategoryRepository, RepositoryError};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::{Category, NewCategory, UpdateCategory};
use crate::state::AppState;

/// Create a category.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = CategoryRepository::new(state.pool()).create(&payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List every category.
pub async fn index(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Fetch a single category, for the edit form.
pub async fn show(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Category>, AppError> {
    let category = CategoryRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_owned()))?;

    Ok(Json(category))
}

/// Apply a partial update to a category.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(payload): Json<UpdateCategory>,
) -> Result<Json<Category>, AppError> {
    let category = CategoryRepository::new(state.pool())
        .update(id, &payload)
        .await
        .map_err(|err| match err {
            RepositoryError::NotFound => AppError::NotFound("Category not found".to_owned()),
            other => other.into(),
        })?;

    Ok(Json(category))
}

/// Delete a category.
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Value>, AppError> {
    CategoryRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|err| match err {
            RepositoryError::NotFound => AppError::NotFound("Category not found".to_owned()),
            other => other.into(),
        })?;

    Ok(Json(json!({ "success": true })))
}
