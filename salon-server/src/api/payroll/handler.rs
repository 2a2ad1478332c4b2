//! Payroll API Handlers
//!
//! Periods come from the configured pay schedule; summaries are the
//! flat pass-through computed in [`crate::payroll::summary`]. Closing a
//! period freezes the summary into the payroll history.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared::models::{PayPeriod, PayrollPeriodSnapshot, PayrollSnapshotEntry, PaySchedule};

use crate::core::ServerState;
use crate::db::store::{AppointmentStore, SettingsStore, StaffStore, TransactionStore};
use crate::payroll::{
    current_period, detail, previous_period, schedule_description, summarize, upcoming_periods,
    PayrollDetail, PayrollSummary,
};
use crate::utils::time::require_date;
use crate::utils::{AppError, AppResult, ErrorCode};

fn pay_schedule(state: &ServerState) -> AppResult<PaySchedule> {
    Ok(SettingsStore::new(state.kv.clone())
        .business_info()?
        .pay_schedule)
}

/// Resolve the requested range: explicit start+end win, otherwise the
/// current period on the configured schedule.
fn resolve_range(
    state: &ServerState,
    start: Option<&str>,
    end: Option<&str>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    match (start, end) {
        (Some(start), Some(end)) => {
            let start = require_date(start)?;
            let end = require_date(end)?;
            if end < start {
                return Err(AppError::new(ErrorCode::InvalidPayPeriod));
            }
            Ok((start, end))
        }
        (None, None) => {
            let period = current_period(&pay_schedule(state)?, state.today());
            Ok((period.start, period.end))
        }
        _ => Err(AppError::with_message(
            ErrorCode::InvalidPayPeriod,
            "start and end must be given together",
        )),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodsResponse {
    pub description: String,
    pub current: PayPeriod,
    pub previous: PayPeriod,
    pub upcoming: Vec<PayPeriod>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodsQuery {
    /// How many upcoming periods to include, capped at 12.
    pub count: Option<usize>,
}

/// GET /api/payroll/periods?count=
pub async fn periods(
    State(state): State<ServerState>,
    Query(query): Query<PeriodsQuery>,
) -> AppResult<Json<PeriodsResponse>> {
    let schedule = pay_schedule(&state)?;
    let today = state.today();
    let count = query.count.unwrap_or(3).min(12);
    Ok(Json(PeriodsResponse {
        description: schedule_description(&schedule),
        current: current_period(&schedule, today),
        previous: previous_period(&schedule, today),
        upcoming: upcoming_periods(&schedule, today, count),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

fn load_summary(state: &ServerState, start: NaiveDate, end: NaiveDate) -> AppResult<PayrollSummary> {
    let staff = StaffStore::new(state.kv.clone()).list()?;
    let appointments = AppointmentStore::new(state.kv.clone()).list_between(start, end)?;
    let transactions = TransactionStore::new(state.kv.clone()).list()?;
    Ok(summarize(&staff, &appointments, &transactions, start, end))
}

/// GET /api/payroll/summary
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<PayrollSummary>> {
    let (start, end) = resolve_range(&state, query.start.as_deref(), query.end.as_deref())?;
    Ok(Json(load_summary(&state, start, end)?))
}

/// GET /api/payroll/staff/:id
pub async fn staff_detail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<PayrollDetail>> {
    let member = StaffStore::new(state.kv.clone())
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound))?;
    if !member.is_groomer {
        return Err(AppError::new(ErrorCode::NotAGroomer));
    }

    let (start, end) = resolve_range(&state, query.start.as_deref(), query.end.as_deref())?;
    let appointments = AppointmentStore::new(state.kv.clone()).list_between(start, end)?;
    let transactions = TransactionStore::new(state.kv.clone()).list()?;
    Ok(Json(detail(&member, &appointments, &transactions, start, end)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosePayload {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// POST /api/payroll/close
///
/// Snapshots the summary for the range (current period by default) and
/// appends it to the history.
pub async fn close_period(
    State(state): State<ServerState>,
    Json(payload): Json<ClosePayload>,
) -> AppResult<Json<PayrollPeriodSnapshot>> {
    let (start, end) = resolve_range(&state, payload.start.as_deref(), payload.end.as_deref())?;
    let summary = load_summary(&state, start, end)?;

    let snapshot = PayrollPeriodSnapshot {
        id: uuid::Uuid::new_v4().to_string(),
        period: PayPeriod { start, end },
        closed_at: chrono::Utc::now().to_rfc3339(),
        entries: summary
            .staff
            .iter()
            .map(|s| PayrollSnapshotEntry {
                staff_id: s.staff_id.clone(),
                staff_name: s.staff_name.clone(),
                appointment_count: s.appointment_count,
                gross_revenue: s.gross_revenue,
                tips: s.tips,
                net_pay: s.net_pay,
            })
            .collect(),
        total_gross: summary.total_gross,
        total_tips: summary.total_tips,
        total_net: summary.total_net,
    };

    let snapshot = SettingsStore::new(state.kv.clone()).append_payroll_snapshot(snapshot)?;
    Ok(Json(snapshot))
}

/// GET /api/payroll/history - closed periods, oldest first
pub async fn history(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<PayrollPeriodSnapshot>>> {
    let history = SettingsStore::new(state.kv.clone()).payroll_history()?;
    Ok(Json(history))
}
