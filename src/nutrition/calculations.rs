use crate::models::{DaySummary, FoodConsumption, MealType, Nutrient};
use crate::nutrition::constants::REFERENCE_QUANTITY;

/// Amount of `nutrient` in one consumed food.
///
/// Scales the per-100 reference value by the quantity eaten and rounds to the
/// nearest whole unit, ties away from zero. Returns 0 when the food is absent,
/// the quantity is missing or not positive, or the reference value is missing
/// or not positive. Never fails.
pub fn extract_nutrient(food: Option<&FoodConsumption>, nutrient: Nutrient) -> u64 {
    let Some(food) = food else {
        return 0;
    };

    let quantity = match food.quantity {
        Some(q) if q > 0.0 => q,
        _ => return 0,
    };

    let per_hundred = match food.per_hundred(nutrient) {
        Some(v) if v > 0.0 => v,
        _ => return 0,
    };

    // Float-to-int `as` saturates, so huge inputs clamp to u64::MAX.
    (quantity / REFERENCE_QUANTITY * per_hundred).round() as u64
}

/// Total of `nutrient` across the foods of one meal. Absent or empty is 0.
pub fn aggregate_meal_nutrient(foods: Option<&[FoodConsumption]>, nutrient: Nutrient) -> u64 {
    foods
        .unwrap_or_default()
        .iter()
        .map(|food| extract_nutrient(Some(food), nutrient))
        .fold(0, u64::saturating_add)
}

/// Total of `nutrient` across all four meals of a day. Absent day is 0.
pub fn aggregate_day_nutrient(day: Option<&DaySummary>, nutrient: Nutrient) -> u64 {
    let Some(day) = day else {
        return 0;
    };

    MealType::ALL
        .iter()
        .map(|&meal| aggregate_meal_nutrient(Some(day.foods(meal)), nutrient))
        .fold(0, u64::saturating_add)
}

pub fn daily_energy(day: Option<&DaySummary>) -> u64 {
    aggregate_day_nutrient(day, Nutrient::Energy)
}

pub fn daily_protein(day: Option<&DaySummary>) -> u64 {
    aggregate_day_nutrient(day, Nutrient::Protein)
}

pub fn daily_fat(day: Option<&DaySummary>) -> u64 {
    aggregate_day_nutrient(day, Nutrient::Fat)
}

pub fn daily_carbohydrate(day: Option<&DaySummary>) -> u64 {
    aggregate_day_nutrient(day, Nutrient::Carbohydrate)
}

// Calorie shorthands.

pub fn food_calorie(food: Option<&FoodConsumption>) -> u64 {
    extract_nutrient(food, Nutrient::Energy)
}

pub fn meal_total_calorie(foods: Option<&[FoodConsumption]>) -> u64 {
    aggregate_meal_nutrient(foods, Nutrient::Energy)
}

pub fn daily_total_calorie(day: Option<&DaySummary>) -> u64 {
    daily_energy(day)
}
