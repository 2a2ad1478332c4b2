//! Appointment Model

use serde::{Deserialize, Serialize};

use super::pet::WeightCategory;

/// Appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Paid,
}

impl AppointmentStatus {
    /// Statuses that count toward revenue and performance aggregates
    pub fn is_revenue(&self) -> bool {
        matches!(self, Self::Completed | Self::Paid)
    }

    /// Statuses that occupy a time slot on the calendar
    pub fn blocks_slot(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

/// Service line item on an appointment (main service or add-on)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentService {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub is_add_on: bool,
}

/// Appointment record
///
/// Client / pet / groomer are referenced by id with denormalized display
/// names alongside. Date is `YYYY-MM-DD`; times are 12-hour strings
/// (`"9:00 AM"`) as the original documents store them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub pet_id: String,
    pub pet_name: String,
    pub groomer_id: String,
    pub groomer_name: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Start of the slot, e.g. `"9:00 AM"`
    pub start_time: String,
    /// End of the slot, e.g. `"10:30 AM"`
    pub end_time: String,
    #[serde(default)]
    pub services: Vec<AppointmentService>,
    #[serde(default)]
    pub status: AppointmentStatus,
    pub total_price: f64,
    pub tip_amount: Option<f64>,
    /// Denormalized from the pet at booking time; may go stale if the
    /// pet's weight changes afterwards
    pub pet_weight_category: Option<WeightCategory>,
    pub notes: Option<String>,
}

impl Appointment {
    /// Revenue attributed to this appointment (price + tip)
    pub fn revenue(&self) -> f64 {
        self.total_price + self.tip_amount.unwrap_or(0.0)
    }
}

/// Create appointment payload
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCreate {
    #[validate(length(min = 1, message = "clientId is required"))]
    pub client_id: String,
    #[validate(length(min = 1, message = "petId is required"))]
    pub pet_id: String,
    #[validate(length(min = 1, message = "groomerId is required"))]
    pub groomer_id: String,
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "startTime is required"))]
    pub start_time: String,
    #[validate(length(min = 1, message = "endTime is required"))]
    pub end_time: String,
    #[serde(default)]
    pub services: Vec<AppointmentService>,
    #[validate(range(min = 0.0, message = "totalPrice must be non-negative"))]
    pub total_price: f64,
    pub notes: Option<String>,
}

/// Update appointment payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub groomer_id: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub services: Option<Vec<AppointmentService>>,
    pub status: Option<AppointmentStatus>,
    #[validate(range(min = 0.0, message = "totalPrice must be non-negative"))]
    pub total_price: Option<f64>,
    #[validate(range(min = 0.0, message = "tipAmount must be non-negative"))]
    pub tip_amount: Option<f64>,
    pub notes: Option<String>,
}
