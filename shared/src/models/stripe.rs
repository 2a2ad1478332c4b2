//! Stripe Model — connected account settings and status

use serde::{Deserialize, Serialize};

/// Reshaped Stripe account status returned by
/// `GET /api/stripe/connect/status`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectStatus {
    pub charges_enabled: bool,
    pub payouts_enabled: bool,
    pub details_submitted: bool,
}

/// Stored Stripe settings: the connected account id plus the booleans
/// from the last successful status fetch (last write wins)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeSettings {
    pub account_id: Option<String>,
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub last_status: ConnectStatus,
    /// ISO 8601 timestamp of the last successful status fetch
    pub last_checked_at: Option<String>,
}
