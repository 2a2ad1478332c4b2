//! Transaction Model

use serde::{Deserialize, Serialize};

/// Payment method metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// "card" | "cash" | "other"
    pub kind: String,
    /// Card brand when Stripe-backed ("visa", "mastercard", ...)
    pub card_brand: Option<String>,
    /// Last four digits when Stripe-backed
    pub card_last4: Option<String>,
}

/// Line item on a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItem {
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Completed payment record, back-referencing its appointment
///
/// Intended invariant (not enforced): `tip_amount <= total`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub appointment_id: String,
    #[serde(default)]
    pub items: Vec<TransactionItem>,
    pub subtotal: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub fees: f64,
    #[serde(default)]
    pub tip_amount: f64,
    pub total: f64,
    pub payment_method: PaymentMethod,
    /// ISO 8601 timestamp
    pub created_at: Option<String>,
}

/// Create transaction payload
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreate {
    #[validate(length(min = 1, message = "appointmentId is required"))]
    pub appointment_id: String,
    #[serde(default)]
    pub items: Vec<TransactionItem>,
    #[validate(range(min = 0.0, message = "subtotal must be non-negative"))]
    pub subtotal: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "discount must be non-negative"))]
    pub discount: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "fees must be non-negative"))]
    pub fees: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "tipAmount must be non-negative"))]
    pub tip_amount: f64,
    #[validate(range(min = 0.0, message = "total must be non-negative"))]
    pub total: f64,
    pub payment_method: PaymentMethod,
}
