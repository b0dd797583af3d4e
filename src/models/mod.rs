mod food;
mod meal;
mod nutrient;

pub use food::{Food, FoodConsumption, FoodUnit};
pub use meal::{DaySummary, MealSlot, MealType};
pub use nutrient::{Nutrient, NutrientProfile};
