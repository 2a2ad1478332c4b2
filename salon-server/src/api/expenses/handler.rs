//! Expense API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use shared::models::{ExpenseCreate, ExpenseRecord, ExpenseUpdate};

use crate::core::ServerState;
use crate::db::store::ExpenseStore;
use crate::utils::time::require_date;
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/expenses
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ExpenseRecord>>> {
    let expenses = ExpenseStore::new(state.kv.clone()).list()?;
    Ok(Json(expenses))
}

/// GET /api/expenses/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ExpenseRecord>> {
    let expense = ExpenseStore::new(state.kv.clone())
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::ExpenseNotFound))?;
    Ok(Json(expense))
}

/// POST /api/expenses
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseCreate>,
) -> AppResult<Json<ExpenseRecord>> {
    payload.validate()?;
    require_date(&payload.date)?;

    let expense = ExpenseRecord {
        id: uuid::Uuid::new_v4().to_string(),
        vendor: payload.vendor,
        category: payload.category,
        date: payload.date,
        amount: payload.amount,
        status: payload.status,
        notes: payload.notes,
    };
    let expense = ExpenseStore::new(state.kv.clone()).insert(expense)?;
    Ok(Json(expense))
}

/// PUT /api/expenses/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ExpenseUpdate>,
) -> AppResult<Json<ExpenseRecord>> {
    payload.validate()?;

    let store = ExpenseStore::new(state.kv.clone());
    let mut expense = store
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::ExpenseNotFound))?;

    if let Some(vendor) = payload.vendor {
        expense.vendor = vendor;
    }
    if let Some(category) = payload.category {
        expense.category = category;
    }
    if let Some(date) = payload.date {
        require_date(&date)?;
        expense.date = date;
    }
    if let Some(amount) = payload.amount {
        expense.amount = amount;
    }
    if let Some(status) = payload.status {
        expense.status = status;
    }
    if payload.notes.is_some() {
        expense.notes = payload.notes;
    }

    let expense = store
        .replace(expense)?
        .ok_or_else(|| AppError::new(ErrorCode::ExpenseNotFound))?;
    Ok(Json(expense))
}

/// DELETE /api/expenses/:id
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = ExpenseStore::new(state.kv.clone()).remove(&id)?;
    if !removed {
        return Err(AppError::new(ErrorCode::ExpenseNotFound));
    }
    Ok(Json(removed))
}
