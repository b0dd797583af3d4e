pub mod calculations;
pub mod constants;
pub mod totals;

pub use calculations::{
    aggregate_day_nutrient, aggregate_meal_nutrient, daily_carbohydrate, daily_energy, daily_fat,
    daily_protein, daily_total_calorie, extract_nutrient, food_calorie, meal_total_calorie,
};
pub use constants::*;
pub use totals::{day_totals, meal_breakdown, meal_totals, NutrientTotals};
