use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::food::FoodConsumption;

/// The four fixed eating occasions of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// Display label used by the product UI.
    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "아침",
            MealType::Lunch => "점심",
            MealType::Dinner => "저녁",
            MealType::Snack => "간식",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    /// Wire value (`BREAKFAST`, ...).
    pub fn code(self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
            MealType::Snack => "SNACK",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english())
    }
}

/// Foods eaten in one meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_id: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_meal_foods")]
    pub meal_foods: Vec<FoodConsumption>,
}

/// A null list reads as empty and null entries are dropped.
fn deserialize_meal_foods<'de, D>(deserializer: D) -> Result<Vec<FoodConsumption>, D::Error>
where
    D: Deserializer<'de>,
{
    let foods: Option<Vec<Option<FoodConsumption>>> = Option::deserialize(deserializer)?;
    Ok(foods.into_iter().flatten().flatten().collect())
}

/// One calendar day of meals. A missing slot means nothing was eaten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_diet_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MealSlot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<MealSlot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<MealSlot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack: Option<MealSlot>,
}

impl DaySummary {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn slot(&self, meal: MealType) -> Option<&MealSlot> {
        match meal {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
            MealType::Snack => self.snack.as_ref(),
        }
    }

    pub fn slot_mut_or_default(&mut self, meal: MealType) -> &mut MealSlot {
        let slot = match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        };
        slot.get_or_insert_with(MealSlot::default)
    }

    /// Foods recorded for a meal; empty when the slot is absent.
    pub fn foods(&self, meal: MealType) -> &[FoodConsumption] {
        self.slot(meal)
            .map(|s| s.meal_foods.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        MealType::ALL.iter().all(|&m| self.foods(m).is_empty())
    }
}
