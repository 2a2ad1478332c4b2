//! Staff Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Compensation parameters for a staff member
///
/// Edited through the staff screens and stored with the record. Payroll
/// summaries intentionally do not consume these values yet — displayed
/// payroll remains a flat pass-through of appointment revenue (see
/// `salon-server::payroll::summary`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompensationPlan {
    /// Commission on service revenue, percent (0-100)
    #[validate(range(min = 0.0, max = 100.0, message = "commission must be 0-100"))]
    pub commission_percent: Option<f64>,
    #[validate(range(min = 0.0, message = "hourly rate must be non-negative"))]
    pub hourly_rate: Option<f64>,
    /// Annual salary
    #[validate(range(min = 0.0, message = "salary must be non-negative"))]
    pub salary: Option<f64>,
    /// Weekly minimum paid when commission falls short
    #[validate(range(min = 0.0, message = "weekly guarantee must be non-negative"))]
    pub weekly_guarantee: Option<f64>,
    /// Override percent on team members' revenue (0-100)
    #[validate(range(min = 0.0, max = 100.0, message = "team override must be 0-100"))]
    pub team_override_percent: Option<f64>,
}

impl CompensationPlan {
    /// Commission and salary are mutually exclusive ways of paying the
    /// same work; both set at once is a configuration mistake.
    pub fn is_consistent(&self) -> bool {
        !(self.commission_percent.is_some() && self.salary.is_some())
    }
}

/// Staff member record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Display role ("Groomer", "Bather", "Front Desk", ...)
    pub role: String,
    /// Whether this member takes grooming appointments
    #[serde(default)]
    pub is_groomer: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub compensation: CompensationPlan,
}

fn default_true() -> bool {
    true
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
    #[serde(default)]
    pub is_groomer: bool,
    #[validate(nested)]
    #[serde(default)]
    pub compensation: CompensationPlan,
}

/// Update staff payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct StaffUpdate {
    pub name: Option<String>,
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub is_groomer: Option<bool>,
    pub is_active: Option<bool>,
    #[validate(nested)]
    pub compensation: Option<CompensationPlan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_validates_nested_compensation() {
        let payload = StaffCreate {
            name: "Dana".to_string(),
            email: None,
            phone: None,
            role: "Groomer".to_string(),
            is_groomer: true,
            compensation: CompensationPlan {
                commission_percent: Some(150.0),
                ..CompensationPlan::default()
            },
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.to_string().contains("commission must be 0-100"));
    }

    #[test]
    fn update_payload_accepts_in_range_compensation() {
        let payload = StaffUpdate {
            compensation: Some(CompensationPlan {
                commission_percent: Some(45.0),
                ..CompensationPlan::default()
            }),
            ..StaffUpdate::default()
        };
        assert!(payload.validate().is_ok());
    }
}
