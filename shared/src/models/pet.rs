//! Pet Model

use serde::{Deserialize, Serialize};

/// Size category derived from a pet's weight, used for size-based
/// pricing and performance bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightCategory {
    Small,
    Medium,
    Large,
    Giant,
}

impl WeightCategory {
    /// All categories in display order (matrix columns)
    pub const ALL: [WeightCategory; 4] = [
        WeightCategory::Small,
        WeightCategory::Medium,
        WeightCategory::Large,
        WeightCategory::Giant,
    ];

    /// Derive the category from a weight in pounds
    ///
    /// small < 20 lbs <= medium < 50 lbs <= large < 90 lbs <= giant
    pub fn from_weight(weight_lbs: f64) -> Self {
        if weight_lbs < 20.0 {
            Self::Small
        } else if weight_lbs < 50.0 {
            Self::Medium
        } else if weight_lbs < 90.0 {
            Self::Large
        } else {
            Self::Giant
        }
    }

    /// Lowercase label as stored on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Giant => "giant",
        }
    }
}

impl std::fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pet record, owned by a [`Client`](super::Client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub breed: String,
    /// Weight in pounds
    pub weight: f64,
    /// Derived from `weight`; recomputed on every weight change
    pub weight_category: WeightCategory,
    /// Temperament tags ("anxious", "friendly", ...)
    #[serde(default)]
    pub temperament: Vec<String>,
    /// Grooming preferences / notes
    pub grooming_notes: Option<String>,
}

/// Create pet payload
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct PetCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "breed is required"))]
    pub breed: String,
    #[validate(range(min = 0.1, max = 400.0, message = "weight must be between 0.1 and 400 lbs"))]
    pub weight: f64,
    #[serde(default)]
    pub temperament: Vec<String>,
    pub grooming_notes: Option<String>,
}

/// Update pet payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct PetUpdate {
    pub name: Option<String>,
    pub breed: Option<String>,
    #[validate(range(min = 0.1, max = 400.0, message = "weight must be between 0.1 and 400 lbs"))]
    pub weight: Option<f64>,
    pub temperament: Option<Vec<String>>,
    pub grooming_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_category_boundaries() {
        assert_eq!(WeightCategory::from_weight(19.9), WeightCategory::Small);
        assert_eq!(WeightCategory::from_weight(20.0), WeightCategory::Medium);
        assert_eq!(WeightCategory::from_weight(49.9), WeightCategory::Medium);
        assert_eq!(WeightCategory::from_weight(50.0), WeightCategory::Large);
        assert_eq!(WeightCategory::from_weight(90.0), WeightCategory::Giant);
    }
}
