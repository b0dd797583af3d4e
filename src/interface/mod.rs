pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_day_csv, write_day_csv};
pub use prompts::{parse_quantity, prompt_food, prompt_meal_type, prompt_quantity, prompt_yes_no};
pub use render::{display_day_summary, display_food_list, format_day_summary};
