use crate::error::{BoardError, Result};
use crate::models::{DaySummary, Food, FoodConsumption, MealType};
use crate::nutrition::{day_totals, NutrientTotals};

/// Edits the meals of a single day.
pub struct DayLog {
    day: DaySummary,
}

impl DayLog {
    pub fn new(day: DaySummary) -> Self {
        Self { day }
    }

    pub fn day(&self) -> &DaySummary {
        &self.day
    }

    /// Record `quantity` units of `food` in a meal.
    pub fn add_food(&mut self, meal: MealType, food: &Food, quantity: f64) -> Result<()> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(BoardError::InvalidInput(format!(
                "quantity must be a positive number, got {}",
                quantity
            )));
        }

        self.day
            .slot_mut_or_default(meal)
            .meal_foods
            .push(food.consume(quantity));
        Ok(())
    }

    /// Remove the food at `index` in a meal, returning it.
    pub fn remove_food(&mut self, meal: MealType, index: usize) -> Result<FoodConsumption> {
        if index >= self.day.foods(meal).len() {
            return Err(BoardError::FoodNotFound(format!(
                "{} has no item #{}",
                meal,
                index + 1
            )));
        }
        Ok(self.day.slot_mut_or_default(meal).meal_foods.remove(index))
    }

    pub fn foods(&self, meal: MealType) -> &[FoodConsumption] {
        self.day.foods(meal)
    }

    /// Nutrient totals for the whole day.
    pub fn totals(&self) -> NutrientTotals {
        day_totals(Some(&self.day))
    }

    pub fn into_day(self) -> DaySummary {
        self.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Nutrient, NutrientProfile};

    fn bread() -> Food {
        Food::new(
            "Bread",
            NutrientProfile::default()
                .with(Nutrient::Energy, 265.0)
                .with(Nutrient::Protein, 9.0),
        )
    }

    #[test]
    fn test_add_food() {
        let mut log = DayLog::new(DaySummary::default());
        log.add_food(MealType::Breakfast, &bread(), 60.0).unwrap();

        assert_eq!(log.foods(MealType::Breakfast).len(), 1);
        assert_eq!(log.foods(MealType::Breakfast)[0].quantity, Some(60.0));
        assert_eq!(log.totals().energy, 159);
    }

    #[test]
    fn test_add_food_rejects_bad_quantity() {
        let mut log = DayLog::new(DaySummary::default());
        for quantity in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                log.add_food(MealType::Lunch, &bread(), quantity),
                Err(BoardError::InvalidInput(_))
            ));
        }
        assert!(log.day().is_empty());
    }

    #[test]
    fn test_failed_remove_leaves_absent_meal_absent() {
        let mut log = DayLog::new(DaySummary::default());
        assert!(matches!(
            log.remove_food(MealType::Snack, 0),
            Err(BoardError::FoodNotFound(_))
        ));
        assert!(log.day().snack.is_none());

        let json = serde_json::to_value(log.day()).unwrap();
        assert!(json.get("snack").is_none());
    }

    #[test]
    fn test_remove_food() {
        let mut log = DayLog::new(DaySummary::default());
        log.add_food(MealType::Snack, &bread(), 30.0).unwrap();

        assert!(matches!(
            log.remove_food(MealType::Snack, 1),
            Err(BoardError::FoodNotFound(_))
        ));

        let removed = log.remove_food(MealType::Snack, 0).unwrap();
        assert_eq!(removed.food_name, "Bread");
        assert!(log.into_day().is_empty());
    }
}
