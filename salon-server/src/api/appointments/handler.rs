//! Appointment API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use shared::models::{Appointment, AppointmentCreate, AppointmentStatus, AppointmentUpdate};

use crate::core::ServerState;
use crate::db::store::{AppointmentStore, ClientStore, SettingsStore, StaffStore};
use crate::scheduling::{self, AvailableSlot};
use crate::utils::time::{parse_clock_time, require_date};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Restrict to one calendar date, `YYYY-MM-DD`
    pub date: Option<String>,
    pub groomer_id: Option<String>,
}

/// GET /api/appointments
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Appointment>>> {
    let store = AppointmentStore::new(state.kv.clone());
    let mut appointments = match &query.date {
        Some(date) => store.list_on_date(date)?,
        None => store.list()?,
    };
    if let Some(groomer_id) = &query.groomer_id {
        appointments.retain(|a| &a.groomer_id == groomer_id);
    }
    Ok(Json(appointments))
}

/// GET /api/appointments/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Appointment>> {
    let appointment = AppointmentStore::new(state.kv.clone())
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::AppointmentNotFound))?;
    Ok(Json(appointment))
}

/// Reject a booking that overlaps an existing one for the same groomer.
/// `exclude_id` skips the appointment being rescheduled.
fn ensure_slot_free(
    store: &AppointmentStore,
    groomer_id: &str,
    date: &str,
    start: chrono::NaiveTime,
    end: chrono::NaiveTime,
    exclude_id: Option<&str>,
) -> AppResult<()> {
    for other in store.list_on_date(date)? {
        if other.groomer_id != groomer_id || !other.status.blocks_slot() {
            continue;
        }
        if exclude_id == Some(other.id.as_str()) {
            continue;
        }
        let (Some(other_start), Some(other_end)) = (
            parse_clock_time(&other.start_time),
            parse_clock_time(&other.end_time),
        ) else {
            continue;
        };
        if start < other_end && other_start < end {
            return Err(AppError::new(ErrorCode::SlotUnavailable)
                .with_detail("conflictingAppointmentId", other.id));
        }
    }
    Ok(())
}

fn parse_slot(start_time: &str, end_time: &str) -> AppResult<(chrono::NaiveTime, chrono::NaiveTime)> {
    let start = parse_clock_time(start_time)
        .ok_or_else(|| AppError::validation(format!("invalid startTime: {}", start_time)))?;
    let end = parse_clock_time(end_time)
        .ok_or_else(|| AppError::validation(format!("invalid endTime: {}", end_time)))?;
    if end <= start {
        return Err(AppError::validation("endTime must be after startTime"));
    }
    Ok((start, end))
}

/// POST /api/appointments
///
/// Client, pet and groomer names plus the pet's size category are
/// denormalized onto the record at booking time.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AppointmentCreate>,
) -> AppResult<Json<Appointment>> {
    payload.validate()?;
    require_date(&payload.date)?;
    let (start, end) = parse_slot(&payload.start_time, &payload.end_time)?;

    let (client, pet) = ClientStore::new(state.kv.clone())
        .find_pet(&payload.pet_id)?
        .filter(|(c, _)| c.id == payload.client_id)
        .ok_or_else(|| AppError::new(ErrorCode::PetNotFound))?;

    let groomer = StaffStore::new(state.kv.clone())
        .get(&payload.groomer_id)?
        .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound))?;
    if !groomer.is_groomer {
        return Err(AppError::new(ErrorCode::NotAGroomer));
    }

    let store = AppointmentStore::new(state.kv.clone());
    ensure_slot_free(&store, &groomer.id, &payload.date, start, end, None)?;

    let appointment = Appointment {
        id: uuid::Uuid::new_v4().to_string(),
        client_id: client.id,
        client_name: client.name,
        pet_id: pet.id,
        pet_name: pet.name,
        groomer_id: groomer.id,
        groomer_name: groomer.name,
        date: payload.date,
        start_time: payload.start_time,
        end_time: payload.end_time,
        services: payload.services,
        status: AppointmentStatus::Scheduled,
        total_price: payload.total_price,
        tip_amount: None,
        pet_weight_category: Some(pet.weight_category),
        notes: payload.notes,
    };
    let appointment = store.insert(appointment)?;
    Ok(Json(appointment))
}

/// PUT /api/appointments/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AppointmentUpdate>,
) -> AppResult<Json<Appointment>> {
    payload.validate()?;

    let store = AppointmentStore::new(state.kv.clone());
    let mut appointment = store
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::AppointmentNotFound))?;
    if appointment.status == AppointmentStatus::Cancelled
        && payload.status != Some(AppointmentStatus::Scheduled)
    {
        return Err(AppError::new(ErrorCode::AppointmentCancelled));
    }

    if let Some(groomer_id) = payload.groomer_id {
        let groomer = StaffStore::new(state.kv.clone())
            .get(&groomer_id)?
            .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound))?;
        if !groomer.is_groomer {
            return Err(AppError::new(ErrorCode::NotAGroomer));
        }
        appointment.groomer_id = groomer.id;
        appointment.groomer_name = groomer.name;
    }
    if let Some(date) = payload.date {
        require_date(&date)?;
        appointment.date = date;
    }
    if let Some(start_time) = payload.start_time {
        appointment.start_time = start_time;
    }
    if let Some(end_time) = payload.end_time {
        appointment.end_time = end_time;
    }
    if let Some(services) = payload.services {
        appointment.services = services;
    }
    if let Some(status) = payload.status {
        appointment.status = status;
    }
    if let Some(total_price) = payload.total_price {
        appointment.total_price = total_price;
    }
    if payload.tip_amount.is_some() {
        appointment.tip_amount = payload.tip_amount;
    }
    if payload.notes.is_some() {
        appointment.notes = payload.notes;
    }

    if appointment.status.blocks_slot() {
        let (start, end) = parse_slot(&appointment.start_time, &appointment.end_time)?;
        ensure_slot_free(
            &store,
            &appointment.groomer_id,
            &appointment.date,
            start,
            end,
            Some(&appointment.id),
        )?;
    }

    let appointment = store
        .replace(appointment)?
        .ok_or_else(|| AppError::new(ErrorCode::AppointmentNotFound))?;
    Ok(Json(appointment))
}

/// DELETE /api/appointments/:id
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = AppointmentStore::new(state.kv.clone()).remove(&id)?;
    if !removed {
        return Err(AppError::new(ErrorCode::AppointmentNotFound));
    }
    Ok(Json(removed))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotQuery {
    pub date: String,
    /// Requested appointment length in minutes
    pub duration: u32,
    pub groomer_id: Option<String>,
}

/// GET /api/appointments/available-slots
pub async fn available_slots(
    State(state): State<ServerState>,
    Query(query): Query<SlotQuery>,
) -> AppResult<Json<Vec<AvailableSlot>>> {
    let date = require_date(&query.date)?;
    if query.duration == 0 {
        return Err(AppError::validation("duration must be positive"));
    }

    let info = SettingsStore::new(state.kv.clone()).business_info()?;
    let existing = AppointmentStore::new(state.kv.clone()).list_on_date(&query.date)?;

    let slots = scheduling::available_slots(
        &info,
        date,
        query.duration,
        &existing,
        query.groomer_id.as_deref(),
    );
    Ok(Json(slots))
}
