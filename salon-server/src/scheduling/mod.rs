//! Appointment slot computation

mod business_hours;

pub use business_hours::{available_slots, AvailableSlot};
