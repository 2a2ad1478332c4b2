//! Business Info API Handlers

use axum::{extract::State, Json};

use shared::models::{BusinessInfo, BusinessInfoUpdate, DayHours, WeekHours};

use crate::core::ServerState;
use crate::db::store::SettingsStore;
use crate::utils::time::parse_clock_time;
use crate::utils::{AppError, AppResult};

/// GET /api/business-info
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<BusinessInfo>> {
    let info = SettingsStore::new(state.kv.clone()).business_info()?;
    Ok(Json(info))
}

fn check_day(day: &str, hours: &DayHours) -> AppResult<()> {
    if hours.closed {
        return Ok(());
    }
    let (Some(open), Some(close)) = (parse_clock_time(&hours.open), parse_clock_time(&hours.close))
    else {
        return Err(AppError::validation(format!("{}: invalid open/close time", day)));
    };
    if close <= open {
        return Err(AppError::validation(format!(
            "{}: close must be after open",
            day
        )));
    }
    Ok(())
}

fn check_hours(hours: &WeekHours) -> AppResult<()> {
    check_day("monday", &hours.monday)?;
    check_day("tuesday", &hours.tuesday)?;
    check_day("wednesday", &hours.wednesday)?;
    check_day("thursday", &hours.thursday)?;
    check_day("friday", &hours.friday)?;
    check_day("saturday", &hours.saturday)?;
    check_day("sunday", &hours.sunday)?;
    Ok(())
}

/// PUT /api/business-info
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<BusinessInfoUpdate>,
) -> AppResult<Json<BusinessInfo>> {
    let store = SettingsStore::new(state.kv.clone());
    let mut info = store.business_info()?;

    if let Some(name) = payload.name {
        info.name = name;
    }
    if payload.email.is_some() {
        info.email = payload.email;
    }
    if payload.phone.is_some() {
        info.phone = payload.phone;
    }
    if payload.address.is_some() {
        info.address = payload.address;
    }
    if let Some(hours) = payload.hours {
        check_hours(&hours)?;
        info.hours = hours;
    }
    if let Some(interval) = payload.slot_interval_minutes {
        if interval == 0 {
            return Err(AppError::validation("slotIntervalMinutes must be positive"));
        }
        info.slot_interval_minutes = interval;
    }
    if let Some(pay_schedule) = payload.pay_schedule {
        info.pay_schedule = pay_schedule;
    }

    store.save_business_info(&info)?;
    Ok(Json(info))
}
