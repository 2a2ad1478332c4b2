//! Client API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use shared::models::{Client, ClientCreate, ClientUpdate, Pet, PetCreate, PetUpdate, WeightCategory};

use crate::core::ServerState;
use crate::db::store::{ClientStore, PetPhotoStore};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/clients
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientStore::new(state.kv.clone()).list()?;
    Ok(Json(clients))
}

/// GET /api/clients/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Client>> {
    let client = ClientStore::new(state.kv.clone())
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;
    Ok(Json(client))
}

/// POST /api/clients
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ClientCreate>,
) -> AppResult<Json<Client>> {
    payload.validate()?;

    let client = Client {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        address: payload.address,
        notes: payload.notes,
        pets: Vec::new(),
        created_at: Some(chrono::Utc::now().to_rfc3339()),
    };
    let client = ClientStore::new(state.kv.clone()).insert(client)?;
    Ok(Json(client))
}

/// PUT /api/clients/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ClientUpdate>,
) -> AppResult<Json<Client>> {
    payload.validate()?;

    let store = ClientStore::new(state.kv.clone());
    let mut client = store
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;

    if let Some(name) = payload.name {
        client.name = name;
    }
    if payload.email.is_some() {
        client.email = payload.email;
    }
    if payload.phone.is_some() {
        client.phone = payload.phone;
    }
    if payload.address.is_some() {
        client.address = payload.address;
    }
    if payload.notes.is_some() {
        client.notes = payload.notes;
    }

    let client = store
        .replace(client)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;
    Ok(Json(client))
}

/// DELETE /api/clients/:id
///
/// Also drops each pet's photo slot.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let store = ClientStore::new(state.kv.clone());
    let client = store
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;

    let photos = PetPhotoStore::new(state.kv.clone());
    for pet in &client.pets {
        photos.remove_all(&pet.id)?;
    }

    let removed = store.remove(&id)?;
    Ok(Json(removed))
}

// ========== Pets ==========

/// POST /api/clients/:id/pets
pub async fn add_pet(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PetCreate>,
) -> AppResult<Json<Client>> {
    payload.validate()?;

    let store = ClientStore::new(state.kv.clone());
    let mut client = store
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;

    let pet = Pet {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        breed: payload.breed,
        weight: payload.weight,
        weight_category: WeightCategory::from_weight(payload.weight),
        temperament: payload.temperament,
        grooming_notes: payload.grooming_notes,
    };
    client.pets.push(pet);

    let client = store
        .replace(client)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;
    Ok(Json(client))
}

/// PUT /api/clients/:id/pets/:pet_id
///
/// A weight change recomputes the size category.
pub async fn update_pet(
    State(state): State<ServerState>,
    Path((id, pet_id)): Path<(String, String)>,
    Json(payload): Json<PetUpdate>,
) -> AppResult<Json<Client>> {
    payload.validate()?;

    let store = ClientStore::new(state.kv.clone());
    let mut client = store
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;
    let pet = client
        .pets
        .iter_mut()
        .find(|p| p.id == pet_id)
        .ok_or_else(|| AppError::new(ErrorCode::PetNotFound))?;

    if let Some(name) = payload.name {
        pet.name = name;
    }
    if let Some(breed) = payload.breed {
        pet.breed = breed;
    }
    if let Some(weight) = payload.weight {
        pet.weight = weight;
        pet.weight_category = WeightCategory::from_weight(weight);
    }
    if let Some(temperament) = payload.temperament {
        pet.temperament = temperament;
    }
    if payload.grooming_notes.is_some() {
        pet.grooming_notes = payload.grooming_notes;
    }

    let client = store
        .replace(client)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;
    Ok(Json(client))
}

/// DELETE /api/clients/:id/pets/:pet_id
pub async fn remove_pet(
    State(state): State<ServerState>,
    Path((id, pet_id)): Path<(String, String)>,
) -> AppResult<Json<Client>> {
    let store = ClientStore::new(state.kv.clone());
    let mut client = store
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;

    let before = client.pets.len();
    client.pets.retain(|p| p.id != pet_id);
    if client.pets.len() == before {
        return Err(AppError::new(ErrorCode::PetNotFound));
    }

    PetPhotoStore::new(state.kv.clone()).remove_all(&pet_id)?;

    let client = store
        .replace(client)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;
    Ok(Json(client))
}

// ========== Pet photos ==========

#[derive(Debug, Deserialize, Validate)]
pub struct PhotoUpload {
    /// Data-URL encoded image
    #[validate(length(min = 1, message = "photo is required"))]
    pub photo: String,
}

fn require_pet(state: &ServerState, client_id: &str, pet_id: &str) -> AppResult<()> {
    let client = ClientStore::new(state.kv.clone())
        .get(client_id)?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;
    if client.pet(pet_id).is_none() {
        return Err(AppError::new(ErrorCode::PetNotFound));
    }
    Ok(())
}

/// GET /api/clients/:id/pets/:pet_id/photos
pub async fn list_photos(
    State(state): State<ServerState>,
    Path((id, pet_id)): Path<(String, String)>,
) -> AppResult<Json<Vec<String>>> {
    require_pet(&state, &id, &pet_id)?;
    let photos = PetPhotoStore::new(state.kv.clone()).photos(&pet_id)?;
    Ok(Json(photos))
}

/// POST /api/clients/:id/pets/:pet_id/photos
pub async fn add_photo(
    State(state): State<ServerState>,
    Path((id, pet_id)): Path<(String, String)>,
    Json(payload): Json<PhotoUpload>,
) -> AppResult<Json<Vec<String>>> {
    payload.validate()?;
    require_pet(&state, &id, &pet_id)?;

    let store = PetPhotoStore::new(state.kv.clone());
    let mut photos = store.photos(&pet_id)?;
    photos.push(payload.photo);
    store.save(&pet_id, &photos)?;
    Ok(Json(photos))
}

/// PUT /api/clients/:id/pets/:pet_id/photos
///
/// Replaces the whole photo list for the pet.
pub async fn replace_photos(
    State(state): State<ServerState>,
    Path((id, pet_id)): Path<(String, String)>,
    Json(photos): Json<Vec<String>>,
) -> AppResult<Json<Vec<String>>> {
    require_pet(&state, &id, &pet_id)?;
    if photos.iter().any(|p| p.is_empty()) {
        return Err(AppError::invalid("photos must not be empty strings"));
    }
    PetPhotoStore::new(state.kv.clone()).save(&pet_id, &photos)?;
    Ok(Json(photos))
}

/// DELETE /api/clients/:id/pets/:pet_id/photos/:index
pub async fn remove_photo(
    State(state): State<ServerState>,
    Path((id, pet_id, index)): Path<(String, String, usize)>,
) -> AppResult<Json<Vec<String>>> {
    require_pet(&state, &id, &pet_id)?;

    let photos = PetPhotoStore::new(state.kv.clone())
        .remove_at(&pet_id, index)?
        .ok_or_else(|| AppError::invalid(format!("no photo at index {}", index)))?;
    Ok(Json(photos))
}
