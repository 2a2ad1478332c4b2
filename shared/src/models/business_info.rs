//! Business Info Model

use serde::{Deserialize, Serialize};

use super::payroll::PaySchedule;

/// Opening hours for one weekday
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    /// Opening time, 24-hour `"HH:MM"`
    pub open: String,
    /// Closing time, 24-hour `"HH:MM"`
    pub close: String,
    #[serde(default)]
    pub closed: bool,
}

impl Default for DayHours {
    fn default() -> Self {
        Self {
            open: "09:00".to_string(),
            close: "17:00".to_string(),
            closed: false,
        }
    }
}

/// Weekly opening hours, Monday first
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekHours {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl WeekHours {
    /// Hours for a chrono weekday
    pub fn for_weekday(&self, weekday: chrono::Weekday) -> &DayHours {
        match weekday {
            chrono::Weekday::Mon => &self.monday,
            chrono::Weekday::Tue => &self.tuesday,
            chrono::Weekday::Wed => &self.wednesday,
            chrono::Weekday::Thu => &self.thursday,
            chrono::Weekday::Fri => &self.friday,
            chrono::Weekday::Sat => &self.saturday,
            chrono::Weekday::Sun => &self.sunday,
        }
    }
}

impl Default for WeekHours {
    fn default() -> Self {
        Self {
            monday: DayHours::default(),
            tuesday: DayHours::default(),
            wednesday: DayHours::default(),
            thursday: DayHours::default(),
            friday: DayHours::default(),
            saturday: DayHours::default(),
            sunday: DayHours {
                closed: true,
                ..DayHours::default()
            },
        }
    }
}

/// Salon profile: contact info, opening hours and the pay schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub hours: WeekHours,
    /// Appointment grid granularity in minutes
    #[serde(default = "default_slot_interval")]
    pub slot_interval_minutes: u32,
    #[serde(default)]
    pub pay_schedule: PaySchedule,
}

fn default_slot_interval() -> u32 {
    30
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "Bristle Grooming".to_string(),
            email: None,
            phone: None,
            address: None,
            hours: WeekHours::default(),
            slot_interval_minutes: default_slot_interval(),
            pay_schedule: PaySchedule::default(),
        }
    }
}

/// Update business info payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfoUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub hours: Option<WeekHours>,
    pub slot_interval_minutes: Option<u32>,
    pub pay_schedule: Option<PaySchedule>,
}
