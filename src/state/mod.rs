mod catalog;
mod manager;
mod persistence;

pub use catalog::{FoodCatalog, FUZZY_MATCH_THRESHOLD, MAX_FUZZY_RESULTS};
pub use manager::DayLog;
pub use persistence::{load_catalog, load_day, save_day};
