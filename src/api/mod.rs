pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use types::{CommentUpdate, CreatedPost, NewComment, NewPost, PostUpdate};

use crate::error::Result;
use crate::models::Food;

/// Somewhere foods can be looked up by name.
pub trait FoodSource {
    fn search(&self, name: &str) -> Result<Vec<Food>>;
}
