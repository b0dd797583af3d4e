use serde::{Deserialize, Serialize};

use super::nutrient::{Nutrient, NutrientProfile};

/// Unit a food's quantity is measured in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodUnit {
    #[default]
    #[serde(rename = "g")]
    Gram,

    #[serde(rename = "ml")]
    Milliliter,
}

impl FoodUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            FoodUnit::Gram => "g",
            FoodUnit::Milliliter => "ml",
        }
    }
}

impl std::fmt::Display for FoodUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A catalogue food as returned by the food search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_id: Option<i64>,

    #[serde(default, alias = "foodName")]
    pub name: String,

    #[serde(default)]
    pub unit: FoodUnit,

    #[serde(flatten)]
    pub nutrients: NutrientProfile,
}

impl Food {
    pub fn new(name: impl Into<String>, nutrients: NutrientProfile) -> Self {
        Self {
            food_id: None,
            name: name.into(),
            unit: FoodUnit::Gram,
            nutrients,
        }
    }

    /// Record `quantity` units of this food as eaten.
    pub fn consume(&self, quantity: f64) -> FoodConsumption {
        FoodConsumption {
            meal_food_id: None,
            food_id: self.food_id,
            food_name: self.name.clone(),
            quantity: Some(quantity),
            unit: self.unit,
            nutrients: self.nutrients.clone(),
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// One food eaten as part of a meal, with the amount consumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodConsumption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_food_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_id: Option<i64>,

    #[serde(default)]
    pub food_name: String,

    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub unit: FoodUnit,

    #[serde(flatten)]
    pub nutrients: NutrientProfile,
}

impl FoodConsumption {
    /// Per-100-unit reference value for `nutrient`, if recorded.
    #[inline]
    pub fn per_hundred(&self, nutrient: Nutrient) -> Option<f64> {
        self.nutrients.per_hundred(nutrient)
    }
}
