//! Expense Model

use serde::{Deserialize, Serialize};

/// Expense payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Pending,
    Paid,
}

impl Default for ExpenseStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub vendor: String,
    /// Free-form category ("rent", "supplies", "utilities", ...)
    pub category: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub amount: f64,
    #[serde(default)]
    pub status: ExpenseStatus,
    pub notes: Option<String>,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCreate {
    #[validate(length(min = 1, message = "vendor is required"))]
    pub vendor: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    #[validate(range(min = 0.0, message = "amount must be non-negative"))]
    pub amount: f64,
    #[serde(default)]
    pub status: ExpenseStatus,
    pub notes: Option<String>,
}

/// Update expense payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    #[validate(range(min = 0.0, message = "amount must be non-negative"))]
    pub amount: Option<f64>,
    pub status: Option<ExpenseStatus>,
    pub notes: Option<String>,
}
