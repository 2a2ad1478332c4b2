//! Inventory Model

use serde::{Deserialize, Serialize};

/// Inventory category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryCategory {
    /// Sold to clients (shampoo bottles, toys, treats)
    Retail,
    /// Consumed by the salon (blades, towels, disinfectant)
    Supply,
}

/// Inventory item record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: InventoryCategory,
    pub quantity: u32,
    /// Unit cost to the salon
    pub cost: f64,
    /// Retail price (0 for supplies)
    #[serde(default)]
    pub price: f64,
    /// Reorder when quantity falls to or below this
    pub reorder_threshold: u32,
}

impl InventoryItem {
    /// Whether the item is at or below its reorder threshold
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_threshold
    }
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub category: InventoryCategory,
    pub quantity: u32,
    #[validate(range(min = 0.0, message = "cost must be non-negative"))]
    pub cost: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
    #[serde(default)]
    pub reorder_threshold: u32,
}

/// Update inventory item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUpdate {
    pub name: Option<String>,
    pub category: Option<InventoryCategory>,
    pub quantity: Option<u32>,
    #[validate(range(min = 0.0, message = "cost must be non-negative"))]
    pub cost: Option<f64>,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: Option<f64>,
    pub reorder_threshold: Option<u32>,
}
