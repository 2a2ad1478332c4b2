//! Business info API module (salon profile, hours, pay schedule)

mod handler;

use axum::{
    routing::{get, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/business-info", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get))
        .route("/", put(handler::update))
}
