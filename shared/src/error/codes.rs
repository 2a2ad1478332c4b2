//! Unified error codes for the Bristle platform
//!
//! Error codes are shared between the server and frontends so a client
//! can branch on the code instead of parsing messages. Organized by
//! category:
//! - 0xxx: General errors
//! - 4xxx: Appointment errors
//! - 5xxx: Payment / Stripe errors
//! - 6xxx: Client / pet errors
//! - 7xxx: Inventory errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values for efficient serialization and
/// cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format (date, time, number)
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Appointment ====================
    /// Appointment not found
    AppointmentNotFound = 4001,
    /// Requested time slot is not available
    SlotUnavailable = 4002,
    /// Appointment already cancelled
    AppointmentCancelled = 4003,

    // ==================== 5xxx: Payment / Stripe ====================
    /// Transaction not found
    TransactionNotFound = 5001,
    /// Stripe secret key is not configured
    StripeNotConfigured = 5002,
    /// Stripe account not found
    StripeAccountNotFound = 5003,
    /// Stripe API unavailable or returned an error
    StripeUnavailable = 5004,

    // ==================== 6xxx: Client / Pet ====================
    /// Client not found
    ClientNotFound = 6001,
    /// Pet not found
    PetNotFound = 6002,

    // ==================== 7xxx: Inventory / Expense ====================
    /// Inventory item not found
    InventoryItemNotFound = 7001,
    /// Expense record not found
    ExpenseNotFound = 7002,

    // ==================== 8xxx: Staff / Payroll ====================
    /// Staff member not found
    StaffNotFound = 8001,
    /// Staff member is not a groomer
    NotAGroomer = 8002,
    /// Pay period is invalid (end before start)
    InvalidPayPeriod = 8003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database (storage) error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::AppointmentNotFound => "Appointment not found",
            Self::SlotUnavailable => "Time slot is not available",
            Self::AppointmentCancelled => "Appointment is cancelled",

            Self::TransactionNotFound => "Transaction not found",
            Self::StripeNotConfigured => "Stripe is not configured",
            Self::StripeAccountNotFound => "Stripe account not found",
            Self::StripeUnavailable => "Payment provider unavailable",

            Self::ClientNotFound => "Client not found",
            Self::PetNotFound => "Pet not found",

            Self::InventoryItemNotFound => "Inventory item not found",
            Self::ExpenseNotFound => "Expense record not found",

            Self::StaffNotFound => "Staff member not found",
            Self::NotAGroomer => "Staff member is not a groomer",
            Self::InvalidPayPeriod => "Invalid pay period",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::InvalidFormat),
            7 => Ok(Self::RequiredField),
            8 => Ok(Self::ValueOutOfRange),

            4001 => Ok(Self::AppointmentNotFound),
            4002 => Ok(Self::SlotUnavailable),
            4003 => Ok(Self::AppointmentCancelled),

            5001 => Ok(Self::TransactionNotFound),
            5002 => Ok(Self::StripeNotConfigured),
            5003 => Ok(Self::StripeAccountNotFound),
            5004 => Ok(Self::StripeUnavailable),

            6001 => Ok(Self::ClientNotFound),
            6002 => Ok(Self::PetNotFound),

            7001 => Ok(Self::InventoryItemNotFound),
            7002 => Ok(Self::ExpenseNotFound),

            8001 => Ok(Self::StaffNotFound),
            8002 => Ok(Self::NotAGroomer),
            8003 => Ok(Self::InvalidPayPeriod),

            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),
            9003 => Ok(Self::ConfigError),

            _ => Err(format!("Unknown error code: {}", value)),
        }
    }
}
