//! Stripe API Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::models::{ConnectStatus, StripeSettings};

use crate::core::ServerState;
use crate::db::store::SettingsStore;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    /// Connected account; falls back to the stored settings
    pub account_id: Option<String>,
}

/// GET /api/stripe/connect/status
///
/// Proxies the accounts endpoint and caches the three capability
/// booleans in the stored settings.
pub async fn connect_status(
    State(state): State<ServerState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<ConnectStatus>> {
    let store = SettingsStore::new(state.kv.clone());
    let mut settings = store.stripe_settings()?;

    let account_id = query
        .account_id
        .filter(|id| !id.is_empty())
        .or_else(|| settings.account_id.clone())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::invalid("accountId is required"))?;

    let status = state.stripe.connect_status(&account_id).await?;

    settings.account_id = Some(account_id);
    settings.connected = status.charges_enabled && status.details_submitted;
    settings.last_status = status;
    settings.last_checked_at = Some(chrono::Utc::now().to_rfc3339());
    store.save_stripe_settings(&settings)?;

    Ok(Json(status))
}

/// GET /api/stripe/settings
pub async fn settings(State(state): State<ServerState>) -> AppResult<Json<StripeSettings>> {
    let settings = SettingsStore::new(state.kv.clone()).stripe_settings()?;
    Ok(Json(settings))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPayload {
    pub account_id: Option<String>,
}

/// PUT /api/stripe/settings
///
/// Changing the account id resets the cached status.
pub async fn update_settings(
    State(state): State<ServerState>,
    Json(payload): Json<SettingsPayload>,
) -> AppResult<Json<StripeSettings>> {
    let store = SettingsStore::new(state.kv.clone());
    let mut settings = store.stripe_settings()?;

    if settings.account_id != payload.account_id {
        settings = StripeSettings {
            account_id: payload.account_id,
            ..StripeSettings::default()
        };
    }

    store.save_stripe_settings(&settings)?;
    Ok(Json(settings))
}
