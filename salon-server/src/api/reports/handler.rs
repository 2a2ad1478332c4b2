//! Reports API Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::store::{AppointmentStore, ClientStore, StaffStore};
use crate::reporting::{build_performance_data, PerformanceData};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceQuery {
    /// Restrict to one groomer; omitted means salon-wide
    pub groomer_id: Option<String>,
}

/// GET /api/reports/performance
pub async fn performance(
    State(state): State<ServerState>,
    Query(query): Query<PerformanceQuery>,
) -> AppResult<Json<PerformanceData>> {
    if let Some(groomer_id) = &query.groomer_id {
        let member = StaffStore::new(state.kv.clone())
            .get(groomer_id)?
            .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound))?;
        if !member.is_groomer {
            return Err(AppError::new(ErrorCode::NotAGroomer));
        }
    }

    let appointments = AppointmentStore::new(state.kv.clone()).list()?;
    let clients = ClientStore::new(state.kv.clone()).list()?;

    let data = build_performance_data(
        &appointments,
        &clients,
        query.groomer_id.as_deref(),
        state.today(),
    );
    Ok(Json(data))
}
