use serde::Serialize;

use crate::models::{DaySummary, FoodConsumption, MealType, Nutrient};
use crate::nutrition::calculations::{aggregate_day_nutrient, aggregate_meal_nutrient};

/// Whole-unit totals for every tracked nutrient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NutrientTotals {
    pub energy: u64,
    pub protein: u64,
    pub fat: u64,
    pub carbohydrate: u64,
    pub sugar: u64,
    pub sodium: u64,
}

impl NutrientTotals {
    pub fn get(&self, nutrient: Nutrient) -> u64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
        }
    }

    /// Build totals by evaluating `f` once per nutrient.
    fn from_fn(mut f: impl FnMut(Nutrient) -> u64) -> Self {
        Self {
            energy: f(Nutrient::Energy),
            protein: f(Nutrient::Protein),
            fat: f(Nutrient::Fat),
            carbohydrate: f(Nutrient::Carbohydrate),
            sugar: f(Nutrient::Sugar),
            sodium: f(Nutrient::Sodium),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl std::ops::Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals::from_fn(|n| self.get(n).saturating_add(other.get(n)))
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::default(), |acc, t| acc + t)
    }
}

/// All nutrient totals for one meal.
pub fn meal_totals(foods: Option<&[FoodConsumption]>) -> NutrientTotals {
    NutrientTotals::from_fn(|n| aggregate_meal_nutrient(foods, n))
}

/// All nutrient totals for one day.
pub fn day_totals(day: Option<&DaySummary>) -> NutrientTotals {
    NutrientTotals::from_fn(|n| aggregate_day_nutrient(day, n))
}

/// Per-meal totals in breakfast, lunch, dinner, snack order.
pub fn meal_breakdown(day: &DaySummary) -> Vec<(MealType, NutrientTotals)> {
    MealType::ALL
        .iter()
        .map(|&meal| (meal, meal_totals(Some(day.foods(meal)))))
        .collect()
}
