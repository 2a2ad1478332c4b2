//! Settings store — business info, Stripe settings, payroll history

use shared::models::{BusinessInfo, PayrollPeriodSnapshot, StripeSettings};

use super::{BUSINESS_INFO_KEY, PAYROLL_HISTORY_KEY, STRIPE_SETTINGS_KEY};
use crate::db::{KvStore, StorageResult};

/// Store for the singleton configuration blobs and the payroll history
#[derive(Debug, Clone)]
pub struct SettingsStore {
    kv: KvStore,
}

impl SettingsStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Business info, falling back to defaults before first save
    pub fn business_info(&self) -> StorageResult<BusinessInfo> {
        Ok(self.kv.read_blob(BUSINESS_INFO_KEY)?.unwrap_or_default())
    }

    pub fn save_business_info(&self, info: &BusinessInfo) -> StorageResult<()> {
        self.kv.write_blob(BUSINESS_INFO_KEY, info)
    }

    pub fn stripe_settings(&self) -> StorageResult<StripeSettings> {
        Ok(self.kv.read_blob(STRIPE_SETTINGS_KEY)?.unwrap_or_default())
    }

    pub fn save_stripe_settings(&self, settings: &StripeSettings) -> StorageResult<()> {
        self.kv.write_blob(STRIPE_SETTINGS_KEY, settings)
    }

    /// Closed pay-period snapshots, oldest first
    pub fn payroll_history(&self) -> StorageResult<Vec<PayrollPeriodSnapshot>> {
        self.kv.read_collection(PAYROLL_HISTORY_KEY)
    }

    /// Append a closed period (whole-array rewrite)
    pub fn append_payroll_snapshot(
        &self,
        snapshot: PayrollPeriodSnapshot,
    ) -> StorageResult<PayrollPeriodSnapshot> {
        let mut history = self.payroll_history()?;
        history.push(snapshot.clone());
        self.kv.write_collection(PAYROLL_HISTORY_KEY, &history)?;
        Ok(snapshot)
    }
}
