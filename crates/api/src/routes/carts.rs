//! Cart handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use remedia_core::{CartItemId, Email};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db::CartRepository;
use crate::error::AppError;
use crate::models::{CartItem, NewCartItem};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: Email,
}

/// Add an item to a cart.
pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<NewCartItem>,
) -> Result<(StatusCode, Json<CartItem>), AppError> {
    let item = CartRepository::new(state.pool()).add(&payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// List a cart's items by owner email.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<Vec<CartItem>>, AppError> {
    let items = CartRepository::new(state.pool())
        .list_by_email(&query.email)
        .await?;

    Ok(Json(items))
}

/// Remove a single item from a cart.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
) -> Result<Json<Value>, AppError> {
    let deleted = CartRepository::new(state.pool()).delete(id).await?;
    Ok(Json(json!({ "deletedCount": deleted })))
}
