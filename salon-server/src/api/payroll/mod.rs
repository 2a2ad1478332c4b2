//! Payroll API module

mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payroll", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/periods", get(handler::periods))
        .route("/summary", get(handler::summary))
        .route("/staff/{id}", get(handler::staff_detail))
        .route("/close", post(handler::close_period))
        .route("/history", get(handler::history))
}
