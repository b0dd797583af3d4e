//! Date formatting helpers for day logs and plan ranges.

use chrono::{Datelike, NaiveDate};

use crate::error::Result;

const WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")?)
}

/// `YYYY-MM-DD`, the form the backend uses in paths.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `M/D`
pub fn format_date_display(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// `YYYY년 M월 D일 (요일)`
pub fn format_date_full(date: NaiveDate) -> String {
    format!(
        "{}년 {}월 {}일 ({})",
        date.year(),
        date.month(),
        date.day(),
        weekday_label(date)
    )
}

/// `YYYY.M.D`
pub fn format_date_dot(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.year(), date.month(), date.day())
}

/// Single-character Korean weekday, Sunday first.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

/// Apply a formatter to an optional date; a missing date formats as "".
pub fn format_optional(date: Option<NaiveDate>, format: fn(NaiveDate) -> String) -> String {
    date.map(format).unwrap_or_default()
}

/// Number of days covered by a range, counting both ends. Order-insensitive.
pub fn calculate_duration(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// Every date from `start` to `end` inclusive. Empty when `start > end`.
pub fn generate_date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}
