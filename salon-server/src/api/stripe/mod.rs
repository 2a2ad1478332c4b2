//! Stripe API module

mod handler;

use axum::{
    routing::{get, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stripe", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/connect/status", get(handler::connect_status))
        .route("/settings", get(handler::settings))
        .route("/settings", put(handler::update_settings))
}
