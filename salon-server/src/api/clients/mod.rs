//! Client API module (clients, their pets, pet photos)

mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/clients", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}", put(handler::update))
        .route("/{id}", delete(handler::remove))
        // Pets are embedded in the client record
        .route("/{id}/pets", post(handler::add_pet))
        .route("/{id}/pets/{pet_id}", put(handler::update_pet))
        .route("/{id}/pets/{pet_id}", delete(handler::remove_pet))
        // Photos live in a separate slot per pet
        .route("/{id}/pets/{pet_id}/photos", get(handler::list_photos))
        .route("/{id}/pets/{pet_id}/photos", put(handler::replace_photos))
        .route("/{id}/pets/{pet_id}/photos", post(handler::add_photo))
        .route(
            "/{id}/pets/{pet_id}/photos/{index}",
            delete(handler::remove_photo),
        )
}
