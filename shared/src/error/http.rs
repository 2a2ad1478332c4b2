//! HTTP status code mapping for error codes

use super::{ApiResponse, AppError, ErrorCode};
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::AppointmentNotFound
            | Self::TransactionNotFound
            | Self::StripeAccountNotFound
            | Self::ClientNotFound
            | Self::PetNotFound
            | Self::InventoryItemNotFound
            | Self::ExpenseNotFound
            | Self::StaffNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::SlotUnavailable => StatusCode::CONFLICT,

            // 502 Bad Gateway (upstream provider failure)
            Self::StripeUnavailable => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        // 5xx details stay in the log, not the response body
        if status.is_server_error() {
            tracing::error!(code = %self.code, error = %self.message, "Request failed");
        }

        let body = Json(ApiResponse::<()>::error(&self));
        (status, body).into_response()
    }
}
