//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`clients`] - clients with embedded pets and pet photos
//! - [`appointments`] - appointments and slot availability
//! - [`staff`] - staff and compensation configuration
//! - [`inventory`] - retail and supply stock
//! - [`transactions`] - completed payments
//! - [`expenses`] - operating expenses
//! - [`business_info`] - salon profile, hours, pay schedule
//! - [`reports`] - groomer performance reporting
//! - [`payroll`] - pay periods, summaries, closed history
//! - [`stripe`] - Stripe Connect status proxy

pub mod appointments;
pub mod business_info;
pub mod clients;
pub mod expenses;
pub mod health;
pub mod inventory;
pub mod payroll;
pub mod reports;
pub mod staff;
pub mod stripe;
pub mod transactions;
