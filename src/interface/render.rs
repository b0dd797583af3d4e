use std::fmt::Write;

use crate::dates::{format_date_full, format_optional};
use crate::models::{DaySummary, Food, Nutrient};
use crate::nutrition::{day_totals, food_calorie, meal_breakdown, NutrientTotals};

const NAME_WIDTH: usize = 20;

fn totals_columns(totals: &NutrientTotals) -> String {
    Nutrient::CORE
        .iter()
        .map(|&n| format!("{:>8}", totals.get(n)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn header_columns() -> String {
    Nutrient::CORE
        .iter()
        .map(|&n| {
            let label = match n {
                Nutrient::Carbohydrate => "Carbs",
                other => other.label(),
            };
            format!("{:>8}", label)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a day as a per-meal table with a total line.
pub fn format_day_summary(day: &DaySummary) -> String {
    let mut out = String::new();

    let title = format_optional(day.date, format_date_full);
    if title.is_empty() {
        let _ = writeln!(out, "=== Day Summary ===");
    } else {
        let _ = writeln!(out, "=== {} ===", title);
    }

    if day.is_empty() {
        let _ = writeln!(out, "No meals recorded.");
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<width$} {}", "", header_columns(), width = NAME_WIDTH);

    for (meal, totals) in meal_breakdown(day) {
        let heading = format!("{} ({})", meal.english(), meal.label());
        let _ = writeln!(
            out,
            "{:<width$} {}",
            heading,
            totals_columns(&totals),
            width = NAME_WIDTH
        );

        for food in day.foods(meal) {
            let quantity = food
                .quantity
                .map(|q| format!("{}{}", q, food.unit))
                .unwrap_or_else(|| "?".to_string());
            let _ = writeln!(
                out,
                "    {} {} - {} kcal",
                food.food_name,
                quantity,
                food_calorie(Some(food))
            );
        }
    }

    let totals = day_totals(Some(day));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<width$} {}",
        "Total",
        totals_columns(&totals),
        width = NAME_WIDTH
    );

    out
}

/// Display a day summary.
pub fn display_day_summary(day: &DaySummary) {
    println!();
    print!("{}", format_day_summary(day));
    println!();
}

/// Display a simple list of foods with their per-100 values.
pub fn display_food_list(foods: &[Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let values: Vec<String> = Nutrient::CORE
            .iter()
            .map(|&n| match food.nutrients.per_hundred(n) {
                Some(v) => format!("{}: {}{}", n.label(), v, n.unit()),
                None => format!("{}: -", n.label()),
            })
            .collect();
        println!("  {} (per 100{}) {}", food.name, food.unit, values.join(", "));
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, NutrientProfile};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_day() {
        let day = DaySummary::default();
        let out = format_day_summary(&day);
        assert!(out.contains("Day Summary"));
        assert!(out.contains("No meals recorded."));
    }

    #[test]
    fn test_day_table_lists_meals_and_total() {
        let mut day = DaySummary::for_date(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        let egg = Food::new(
            "Egg",
            NutrientProfile::default()
                .with(Nutrient::Energy, 155.0)
                .with(Nutrient::Protein, 13.0),
        );
        day.slot_mut_or_default(MealType::Breakfast)
            .meal_foods
            .push(egg.consume(100.0));

        let out = format_day_summary(&day);
        assert!(out.starts_with("=== 2025년 3월 9일 (일) ==="));
        assert!(out.contains("Breakfast (아침)"));
        assert!(out.contains("Snack (간식)"));
        assert!(out.contains("Egg 100g - 155 kcal"));

        let total_line = out.lines().find(|l| l.starts_with("Total")).unwrap();
        assert!(total_line.contains("155"));
        assert!(total_line.contains("13"));
    }
}
