//! Shared types for the Bristle salon platform
//!
//! Domain models, error types and response structures used by the
//! salon server and any client crate.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
