//! Typed entity stores
//!
//! One store per entity type over the shared [`KvStore`](super::KvStore).
//! Every collection lives wholesale under a fixed slot key; a mutation
//! reads the array, transforms it and writes the whole array back
//! (deleting one record is a filter-rewrite of the collection).

mod appointments;
mod clients;
mod expenses;
mod inventory;
mod photos;
mod settings;
mod staff;
mod transactions;

pub use appointments::AppointmentStore;
pub use clients::ClientStore;
pub use expenses::ExpenseStore;
pub use inventory::InventoryStore;
pub use photos::PetPhotoStore;
pub use settings::SettingsStore;
pub use staff::StaffStore;
pub use transactions::TransactionStore;

// ========== Slot keys ==========

pub(crate) const CLIENTS_KEY: &str = "clients";
pub(crate) const APPOINTMENTS_KEY: &str = "appointments";
pub(crate) const STAFF_KEY: &str = "staff";
pub(crate) const INVENTORY_KEY: &str = "inventory";
pub(crate) const TRANSACTIONS_KEY: &str = "transactions";
pub(crate) const EXPENSES_KEY: &str = "expenses";
pub(crate) const BUSINESS_INFO_KEY: &str = "business-info";
pub(crate) const STRIPE_SETTINGS_KEY: &str = "stripe-settings";
pub(crate) const PAYROLL_HISTORY_KEY: &str = "payroll-history";

/// Slot key for one pet's photo list
pub(crate) fn pet_photos_key(pet_id: &str) -> String {
    format!("pet-photos-{}", pet_id)
}
