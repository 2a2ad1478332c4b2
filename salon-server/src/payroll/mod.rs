//! Payroll — pay-period calendar math and per-groomer summaries

pub mod periods;
pub mod summary;

pub use periods::{current_period, previous_period, schedule_description, upcoming_periods};
pub use summary::{detail, summarize, PayrollDetail, PayrollDetailRow, PayrollSummary, StaffPayroll};
