//! Stripe API client
//!
//! Thin wrapper over the accounts endpoint. Only the three capability
//! booleans the dashboard needs are surfaced; everything else Stripe
//! returns is dropped. Upstream failure detail goes to the log, the
//! caller sees a generic provider error.

use std::time::Duration;

use serde::Deserialize;

use shared::models::ConnectStatus;
use shared::{AppError, AppResult, ErrorCode};

const DEFAULT_API_URL: &str = "https://api.stripe.com";

/// Stripe REST client
///
/// Holds no per-request state; clone freely.
#[derive(Debug, Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(default)]
    charges_enabled: bool,
    #[serde(default)]
    payouts_enabled: bool,
    #[serde(default)]
    details_submitted: bool,
}

impl StripeClient {
    /// Build a client; `base_url` falls back to the public Stripe API
    pub fn new(
        secret_key: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_message(ErrorCode::ConfigError, format!("HTTP client: {e}"))
            })?;
        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            secret_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Fetch a connected account's capability status
    pub async fn connect_status(&self, account_id: &str) -> AppResult<ConnectStatus> {
        let Some(key) = &self.secret_key else {
            return Err(AppError::new(ErrorCode::StripeNotConfigured));
        };

        let url = format!("{}/v1/accounts/{}", self.base_url, account_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(key)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(account_id, error = %e, "Stripe request failed");
                AppError::new(ErrorCode::StripeUnavailable)
            })?;

        match response.status() {
            s if s.is_success() => {}
            reqwest::StatusCode::NOT_FOUND => {
                return Err(AppError::new(ErrorCode::StripeAccountNotFound));
            }
            s => {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(account_id, status = %s, body, "Stripe returned an error");
                return Err(AppError::new(ErrorCode::StripeUnavailable));
            }
        }

        let account: AccountResponse = response.json().await.map_err(|e| {
            tracing::warn!(account_id, error = %e, "Stripe response did not parse");
            AppError::new(ErrorCode::StripeUnavailable)
        })?;

        Ok(ConnectStatus {
            charges_enabled: account.charges_enabled,
            payouts_enabled: account.payouts_enabled,
            details_submitted: account.details_submitted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_client_reports_not_configured() {
        let client =
            StripeClient::new(None, None, Duration::from_secs(5)).unwrap();
        assert!(!client.is_configured());
        let err = client.connect_status("acct_123").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StripeNotConfigured);
    }

    #[test]
    fn missing_capability_fields_default_to_false() {
        let account: AccountResponse =
            serde_json::from_str(r#"{"id":"acct_123","charges_enabled":true}"#).unwrap();
        assert!(account.charges_enabled);
        assert!(!account.payouts_enabled);
        assert!(!account.details_submitted);
    }
}
