use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{DaySummary, Food};
use crate::state::catalog::FoodCatalog;

/// Load a day log from a JSON file. A missing file is an empty day.
pub fn load_day<P: AsRef<Path>>(path: P) -> Result<DaySummary> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "day file missing, starting empty");
        return Ok(DaySummary::default());
    }

    let content = fs::read_to_string(path)?;
    let day: DaySummary = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "loaded day");
    Ok(day)
}

/// Save a day log as pretty JSON in the backend's wire format.
pub fn save_day<P: AsRef<Path>>(path: P, day: &DaySummary) -> Result<()> {
    let json = serde_json::to_string_pretty(day)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), "saved day");
    Ok(())
}

/// Load a food catalogue from a JSON list.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<Food> = serde_json::from_str(&content)?;

    let catalog = FoodCatalog::new(foods);
    debug!(count = catalog.len(), "loaded food catalogue");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, Nutrient, NutrientProfile};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_day_save_and_reload() {
        let mut day = DaySummary::default();
        let rice = Food::new("Rice", NutrientProfile::default().with(Nutrient::Energy, 130.0));
        day.slot_mut_or_default(MealType::Lunch)
            .meal_foods
            .push(rice.consume(200.0));

        let file = NamedTempFile::new().unwrap();
        save_day(file.path(), &day).unwrap();

        let reloaded = load_day(file.path()).unwrap();
        assert_eq!(reloaded, day);
    }

    #[test]
    fn test_missing_day_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let day = load_day(dir.path().join("nope.json")).unwrap();
        assert!(day.is_empty());
    }

    #[test]
    fn test_catalog_deduplication() {
        let json = r#"[
            {"name": "Apple", "unit": "g", "energyPer100": 52},
            {"name": "apple", "unit": "g", "energyPer100": 60},
            {"name": "Milk", "unit": "ml", "fatPer100": 3.5}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        // Last occurrence wins
        let apple = catalog.get("APPLE").unwrap();
        assert_eq!(apple.nutrients.per_hundred(Nutrient::Energy), Some(60.0));
    }
}
