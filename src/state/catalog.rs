use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::api::FoodSource;
use crate::error::Result;
use crate::models::Food;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates returned by a search.
pub const MAX_FUZZY_RESULTS: usize = 5;

/// Local food catalogue keyed by lowercase name.
pub struct FoodCatalog {
    foods: HashMap<String, Food>,
}

impl FoodCatalog {
    /// Build a catalogue keyed by lowercase name. Last occurrence wins.
    pub fn new(foods: Vec<Food>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        Self { foods: map }
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Food> {
        self.foods.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Exact match first; otherwise fuzzy matches, best first.
    pub fn find(&self, name: &str) -> Vec<&Food> {
        let query = name.trim().to_lowercase();
        if let Some(food) = self.foods.get(&query) {
            return vec![food];
        }

        let mut candidates: Vec<(&Food, f64)> = self
            .foods
            .iter()
            .map(|(key, food)| (food, jaro_winkler(key, &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name.cmp(&b.0.name))
        });

        candidates
            .into_iter()
            .take(MAX_FUZZY_RESULTS)
            .map(|(food, _)| food)
            .collect()
    }
}

impl FoodSource for FoodCatalog {
    fn search(&self, name: &str) -> Result<Vec<Food>> {
        Ok(self.find(name).into_iter().cloned().collect())
    }
}
