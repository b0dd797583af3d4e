use std::io::Write;

use diet_board_rs::api::FoodSource;
use diet_board_rs::interface::{format_day_summary, write_day_csv};
use diet_board_rs::models::MealType;
use diet_board_rs::nutrition::daily_energy;
use diet_board_rs::state::{load_catalog, load_day, save_day, DayLog};
use tempfile::{NamedTempFile, TempDir};

const CATALOG: &str = r#"[
    {"foodId": 1, "name": "Oatmeal", "unit": "g", "energyPer100": 68, "proteinPer100": 2.4,
     "fatPer100": 1.4, "carbohydratePer100": 12},
    {"foodId": 2, "name": "Orange Juice", "unit": "ml", "energyPer100": 45,
     "carbohydratePer100": 10.4, "sugarPer100": 8.4},
    {"foodId": 3, "name": "Chicken Breast", "unit": "g", "energyPer100": 165,
     "proteinPer100": 31, "fatPer100": 3.6}
]"#;

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

#[test]
fn test_log_save_reload_summarize() {
    let catalog = load_catalog(catalog_file().path()).unwrap();
    let dir = TempDir::new().unwrap();
    let day_path = dir.path().join("day.json");

    let mut log = DayLog::new(load_day(&day_path).unwrap());

    let oatmeal = catalog.search("oatmeal").unwrap().remove(0);
    let juice = catalog.search("orange juce").unwrap().remove(0);
    let chicken = catalog.get("chicken breast").unwrap().clone();

    log.add_food(MealType::Breakfast, &oatmeal, 250.0).unwrap();
    log.add_food(MealType::Breakfast, &juice, 200.0).unwrap();
    log.add_food(MealType::Dinner, &chicken, 180.0).unwrap();

    // 170 + 90 + 297
    assert_eq!(log.totals().energy, 557);

    save_day(&day_path, log.day()).unwrap();
    let reloaded = load_day(&day_path).unwrap();
    assert_eq!(daily_energy(Some(&reloaded)), 557);
    assert!(reloaded.lunch.is_none());
    assert_eq!(reloaded.foods(MealType::Breakfast)[1].food_name, "Orange Juice");

    let summary = format_day_summary(&reloaded);
    assert!(summary.contains("Orange Juice 200ml - 90 kcal"));
    assert!(summary.lines().any(|l| l.starts_with("Total") && l.contains("557")));

    let mut csv = Vec::new();
    write_day_csv(&reloaded, &mut csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv.lines().count(), 1 + 3 + 1);
    assert!(csv.lines().last().unwrap().contains("TOTAL"));
}

#[test]
fn test_saved_day_uses_backend_field_names() {
    let catalog = load_catalog(catalog_file().path()).unwrap();
    let mut log = DayLog::new(Default::default());
    log.add_food(MealType::Lunch, catalog.get("Oatmeal").unwrap(), 100.0)
        .unwrap();

    let file = NamedTempFile::new().unwrap();
    save_day(file.path(), log.day()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
    let food = &raw["lunch"]["mealFoods"][0];
    assert_eq!(food["foodName"], "Oatmeal");
    assert_eq!(food["foodId"], 1);
    assert_eq!(food["energyPer100"], 68.0);
    assert!(raw.get("breakfast").is_none());
}
