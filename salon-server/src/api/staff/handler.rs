//! Staff API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use shared::models::{Staff, StaffCreate, StaffUpdate};

use crate::core::ServerState;
use crate::db::store::StaffStore;
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/staff
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Staff>>> {
    let staff = StaffStore::new(state.kv.clone()).list()?;
    Ok(Json(staff))
}

/// GET /api/staff/groomers - active groomers only
pub async fn groomers(State(state): State<ServerState>) -> AppResult<Json<Vec<Staff>>> {
    let groomers = StaffStore::new(state.kv.clone()).groomers()?;
    Ok(Json(groomers))
}

/// GET /api/staff/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Staff>> {
    let member = StaffStore::new(state.kv.clone())
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound))?;
    Ok(Json(member))
}

/// POST /api/staff
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<Staff>> {
    payload.validate()?;
    if !payload.compensation.is_consistent() {
        return Err(AppError::validation(
            "commission and salary cannot both be set",
        ));
    }

    let member = Staff {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        role: payload.role,
        is_groomer: payload.is_groomer,
        is_active: true,
        compensation: payload.compensation,
    };
    let member = StaffStore::new(state.kv.clone()).insert(member)?;
    Ok(Json(member))
}

/// PUT /api/staff/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<Staff>> {
    payload.validate()?;

    let store = StaffStore::new(state.kv.clone());
    let mut member = store
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound))?;

    if let Some(name) = payload.name {
        member.name = name;
    }
    if payload.email.is_some() {
        member.email = payload.email;
    }
    if payload.phone.is_some() {
        member.phone = payload.phone;
    }
    if let Some(role) = payload.role {
        member.role = role;
    }
    if let Some(is_groomer) = payload.is_groomer {
        member.is_groomer = is_groomer;
    }
    if let Some(is_active) = payload.is_active {
        member.is_active = is_active;
    }
    if let Some(compensation) = payload.compensation {
        if !compensation.is_consistent() {
            return Err(AppError::validation(
                "commission and salary cannot both be set",
            ));
        }
        member.compensation = compensation;
    }

    let member = store
        .replace(member)?
        .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound))?;
    Ok(Json(member))
}

/// DELETE /api/staff/:id
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = StaffStore::new(state.kv.clone()).remove(&id)?;
    if !removed {
        return Err(AppError::new(ErrorCode::StaffNotFound));
    }
    Ok(Json(removed))
}
