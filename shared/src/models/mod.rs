//! Domain models
//!
//! Flat records persisted wholesale as keyed JSON blobs. Field names on
//! the wire are camelCase to match the stored documents.

pub mod appointment;
pub mod business_info;
pub mod client;
pub mod expense;
pub mod inventory;
pub mod payroll;
pub mod pet;
pub mod staff;
pub mod stripe;
pub mod transaction;

pub use appointment::{
    Appointment, AppointmentCreate, AppointmentService, AppointmentStatus, AppointmentUpdate,
};
pub use business_info::{BusinessInfo, BusinessInfoUpdate, DayHours, WeekHours};
pub use client::{Client, ClientCreate, ClientUpdate};
pub use expense::{ExpenseCreate, ExpenseRecord, ExpenseStatus, ExpenseUpdate};
pub use inventory::{InventoryCategory, InventoryCreate, InventoryItem, InventoryUpdate};
pub use payroll::{PayCadence, PayPeriod, PaySchedule, PayrollPeriodSnapshot, PayrollSnapshotEntry};
pub use pet::{Pet, PetCreate, PetUpdate, WeightCategory};
pub use staff::{CompensationPlan, Staff, StaffCreate, StaffUpdate};
pub use stripe::{ConnectStatus, StripeSettings};
pub use transaction::{PaymentMethod, Transaction, TransactionCreate, TransactionItem};
