//! Utility modules — logging, money and time helpers
//!
//! Error types live in `shared::error`; they are re-exported here so
//! handlers can use one import path.

pub mod logger;
pub mod money;
pub mod time;

pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};
