pub mod api;
pub mod cli;
pub mod dates;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod state;

pub use error::{BoardError, Result};
pub use models::{DaySummary, Food, FoodConsumption, MealSlot, MealType, Nutrient};
