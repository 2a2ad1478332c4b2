//! Transaction API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use shared::models::{AppointmentStatus, Transaction, TransactionCreate};

use crate::core::ServerState;
use crate::db::store::{AppointmentStore, TransactionStore};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub appointment_id: Option<String>,
}

/// GET /api/transactions
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Transaction>>> {
    let store = TransactionStore::new(state.kv.clone());
    let transactions = match &query.appointment_id {
        Some(appointment_id) => store
            .find_by_appointment(appointment_id)?
            .into_iter()
            .collect(),
        None => store.list()?,
    };
    Ok(Json(transactions))
}

/// GET /api/transactions/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Transaction>> {
    let transaction = TransactionStore::new(state.kv.clone())
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::TransactionNotFound))?;
    Ok(Json(transaction))
}

/// POST /api/transactions
///
/// Records the payment and marks the appointment paid, copying the tip
/// onto it.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionCreate>,
) -> AppResult<Json<Transaction>> {
    payload.validate()?;
    if payload.tip_amount > payload.total {
        return Err(AppError::validation("tipAmount cannot exceed total"));
    }

    let appointments = AppointmentStore::new(state.kv.clone());
    let mut appointment = appointments
        .get(&payload.appointment_id)?
        .ok_or_else(|| AppError::new(ErrorCode::AppointmentNotFound))?;
    if appointment.status == AppointmentStatus::Cancelled {
        return Err(AppError::new(ErrorCode::AppointmentCancelled));
    }

    let transaction = Transaction {
        id: uuid::Uuid::new_v4().to_string(),
        appointment_id: payload.appointment_id,
        items: payload.items,
        subtotal: payload.subtotal,
        discount: payload.discount,
        fees: payload.fees,
        tip_amount: payload.tip_amount,
        total: payload.total,
        payment_method: payload.payment_method,
        created_at: Some(chrono::Utc::now().to_rfc3339()),
    };
    let transaction = TransactionStore::new(state.kv.clone()).insert(transaction)?;

    appointment.status = AppointmentStatus::Paid;
    appointment.tip_amount = Some(transaction.tip_amount);
    appointments.replace(appointment)?;

    Ok(Json(transaction))
}
