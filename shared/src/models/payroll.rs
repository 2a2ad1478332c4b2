//! Payroll Model — pay schedule configuration and period snapshots

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pay cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayCadence {
    Weekly,
    Biweekly,
    Semimonthly,
    Monthly,
}

impl Default for PayCadence {
    fn default() -> Self {
        Self::Biweekly
    }
}

/// Configured pay schedule: a cadence plus the anchor date that fixes
/// where weekly/biweekly periods start
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaySchedule {
    pub cadence: PayCadence,
    /// A known period start date. Semimonthly/monthly cadences ignore
    /// the day component.
    pub anchor_date: NaiveDate,
}

impl Default for PaySchedule {
    fn default() -> Self {
        Self {
            cadence: PayCadence::default(),
            // A Friday; period starts tile from here
            anchor_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }
    }
}

/// A single pay period, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayPeriod {
    /// Whether the period contains the given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Finalized payroll snapshot appended to `payroll-history` when a
/// period is closed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollPeriodSnapshot {
    pub id: String,
    pub period: PayPeriod,
    /// ISO 8601 timestamp of the close
    pub closed_at: String,
    /// Per-staff totals as displayed at close time
    pub entries: Vec<PayrollSnapshotEntry>,
    pub total_gross: f64,
    pub total_tips: f64,
    pub total_net: f64,
}

/// One staff row inside a [`PayrollPeriodSnapshot`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSnapshotEntry {
    pub staff_id: String,
    pub staff_name: String,
    pub appointment_count: u32,
    pub gross_revenue: f64,
    pub tips: f64,
    pub net_pay: f64,
}
