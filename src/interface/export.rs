use std::path::Path;

use crate::dates::{format_date, format_optional};
use crate::error::Result;
use crate::models::{DaySummary, MealType, Nutrient};
use crate::nutrition::{day_totals, extract_nutrient};

const HEADER: [&str; 9] = [
    "date",
    "meal",
    "food",
    "quantity",
    "unit",
    "energy_kcal",
    "protein_g",
    "fat_g",
    "carbohydrate_g",
];

/// Write one row per eaten food, then a TOTAL row.
pub fn write_day_csv<W: std::io::Write>(day: &DaySummary, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let date = format_optional(day.date, format_date);

    wtr.write_record(HEADER)?;

    for meal in MealType::ALL {
        for food in day.foods(meal) {
            let mut record = vec![
                date.clone(),
                meal.code().to_string(),
                food.food_name.clone(),
                food.quantity.map(|q| q.to_string()).unwrap_or_default(),
                food.unit.to_string(),
            ];
            record.extend(
                Nutrient::CORE
                    .iter()
                    .map(|&n| extract_nutrient(Some(food), n).to_string()),
            );
            wtr.write_record(&record)?;
        }
    }

    let totals = day_totals(Some(day));
    let mut record = vec![
        date,
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
    ];
    record.extend(Nutrient::CORE.iter().map(|&n| totals.get(n).to_string()));
    wtr.write_record(&record)?;

    wtr.flush()?;
    Ok(())
}

/// Write a day's CSV export to a file.
pub fn export_day_csv(day: &DaySummary, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_day_csv(day, file)
}
