use dialoguer::{Confirm, Input, Select};

use crate::api::FoodSource;
use crate::error::{BoardError, Result};
use crate::models::{Food, MealType};

/// Prompt for which meal to log into.
pub fn prompt_meal_type() -> Result<MealType> {
    let options: Vec<String> = MealType::ALL
        .iter()
        .map(|m| format!("{} ({})", m.english(), m.label()))
        .collect();

    let selection = Select::new()
        .with_prompt("Which meal?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(MealType::ALL[selection.min(MealType::ALL.len() - 1)])
}

/// Parse a positive, finite quantity.
pub fn parse_quantity(input: &str) -> Result<f64> {
    let quantity: f64 = input
        .trim()
        .parse()
        .map_err(|_| BoardError::InvalidInput("Invalid number".to_string()))?;

    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(BoardError::InvalidInput(
            "Quantity must be greater than 0".to_string(),
        ));
    }

    Ok(quantity)
}

/// Prompt for how much of a food was eaten.
pub fn prompt_quantity(food: &Food) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("How much {} ({})?", food.name, food.unit))
        .default("100".to_string())
        .interact_text()?;

    parse_quantity(&input)
}

/// Search a food source and let the user pick one result.
///
/// Returns `None` when the user finishes without choosing.
pub fn prompt_food(source: &dyn FoodSource) -> Result<Option<Food>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Search for a food (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let mut candidates = source.search(input)?;

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let food = candidates.remove(0);
            if food.name.eq_ignore_ascii_case(input) {
                return Ok(Some(food));
            }

            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(food));
            }
            continue;
        }

        let mut options: Vec<String> = candidates.iter().map(|f| f.name.clone()).collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < candidates.len() {
            return Ok(Some(candidates.swap_remove(selection)));
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
