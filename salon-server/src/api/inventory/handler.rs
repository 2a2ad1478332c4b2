//! Inventory API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use shared::models::{InventoryCreate, InventoryItem, InventoryUpdate};

use crate::core::ServerState;
use crate::db::store::InventoryStore;
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/inventory
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = InventoryStore::new(state.kv.clone()).list()?;
    Ok(Json(items))
}

/// GET /api/inventory/reorder - items at or below their threshold
pub async fn reorder_list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = InventoryStore::new(state.kv.clone()).needing_reorder()?;
    Ok(Json(items))
}

/// GET /api/inventory/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryItem>> {
    let item = InventoryStore::new(state.kv.clone())
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::InventoryItemNotFound))?;
    Ok(Json(item))
}

/// POST /api/inventory
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryCreate>,
) -> AppResult<Json<InventoryItem>> {
    payload.validate()?;

    let item = InventoryItem {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        category: payload.category,
        quantity: payload.quantity,
        cost: payload.cost,
        price: payload.price,
        reorder_threshold: payload.reorder_threshold,
    };
    let item = InventoryStore::new(state.kv.clone()).insert(item)?;
    Ok(Json(item))
}

/// PUT /api/inventory/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryUpdate>,
) -> AppResult<Json<InventoryItem>> {
    payload.validate()?;

    let store = InventoryStore::new(state.kv.clone());
    let mut item = store
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::InventoryItemNotFound))?;

    if let Some(name) = payload.name {
        item.name = name;
    }
    if let Some(category) = payload.category {
        item.category = category;
    }
    if let Some(quantity) = payload.quantity {
        item.quantity = quantity;
    }
    if let Some(cost) = payload.cost {
        item.cost = cost;
    }
    if let Some(price) = payload.price {
        item.price = price;
    }
    if let Some(threshold) = payload.reorder_threshold {
        item.reorder_threshold = threshold;
    }

    let item = store
        .replace(item)?
        .ok_or_else(|| AppError::new(ErrorCode::InventoryItemNotFound))?;
    Ok(Json(item))
}

/// DELETE /api/inventory/:id
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = InventoryStore::new(state.kv.clone()).remove(&id)?;
    if !removed {
        return Err(AppError::new(ErrorCode::InventoryItemNotFound));
    }
    Ok(Json(removed))
}
