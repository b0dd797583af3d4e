//! Path builders for the diet board backend.

use chrono::NaiveDate;

use crate::dates::format_date;

pub const DIET_PLANS: &str = "/api/diet-plans";
pub const MY_DIET_PLANS: &str = "/api/diet-plans/my";
pub const PRIMARY_DIET_PLAN: &str = "/api/diet-plans/my/primary";
pub const FOOD_SEARCH: &str = "/api/foods/search";
pub const POSTS: &str = "/api/posts";

pub fn diet_plan(plan_id: i64) -> String {
    format!("{DIET_PLANS}/{plan_id}")
}

pub fn daily_diets(plan_id: i64) -> String {
    format!("{}/daily-diets", diet_plan(plan_id))
}

pub fn daily_diet(plan_id: i64, daily_diet_id: i64) -> String {
    format!("{}/{daily_diet_id}", daily_diets(plan_id))
}

pub fn daily_diet_by_date(plan_id: i64, date: NaiveDate) -> String {
    format!("{}/{}", daily_diets(plan_id), format_date(date))
}

pub fn meals(plan_id: i64, daily_diet_id: i64) -> String {
    format!("{}/meals", daily_diet(plan_id, daily_diet_id))
}

pub fn meal(plan_id: i64, daily_diet_id: i64, meal_id: i64) -> String {
    format!("{}/{meal_id}", meals(plan_id, daily_diet_id))
}

pub fn post(post_id: i64) -> String {
    format!("{POSTS}/{post_id}")
}

pub fn post_like(post_id: i64) -> String {
    format!("{}/like", post(post_id))
}

pub fn post_unlike(post_id: i64) -> String {
    format!("{}/unlike", post(post_id))
}

pub fn comments(post_id: i64) -> String {
    format!("{}/comments", post(post_id))
}

pub fn comment(post_id: i64, comment_id: i64) -> String {
    format!("{}/{comment_id}", comments(post_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_paths() {
        assert_eq!(diet_plan(3), "/api/diet-plans/3");
        assert_eq!(daily_diets(3), "/api/diet-plans/3/daily-diets");
        assert_eq!(daily_diet(3, 11), "/api/diet-plans/3/daily-diets/11");
        assert_eq!(
            daily_diet_by_date(3, NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()),
            "/api/diet-plans/3/daily-diets/2025-04-02"
        );
        assert_eq!(meal(3, 11, 40), "/api/diet-plans/3/daily-diets/11/meals/40");
    }

    #[test]
    fn test_board_paths() {
        assert_eq!(post(9), "/api/posts/9");
        assert_eq!(post_like(9), "/api/posts/9/like");
        assert_eq!(post_unlike(9), "/api/posts/9/unlike");
        assert_eq!(comment(9, 2), "/api/posts/9/comments/2");
    }
}
