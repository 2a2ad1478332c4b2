//! Client Model

use serde::{Deserialize, Serialize};

use super::pet::Pet;

/// Client record with embedded pets
///
/// Pets are stored inline; the whole client list is rewritten on every
/// mutation (wholesale blob semantics).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    /// ISO 8601 creation timestamp
    pub created_at: Option<String>,
}

impl Client {
    /// Find an owned pet by id
    pub fn pet(&self, pet_id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == pet_id)
    }
}

/// Create client payload
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// Update client payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub name: Option<String>,
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}
