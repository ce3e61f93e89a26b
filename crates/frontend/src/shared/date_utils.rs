/// Utilities for date formatting
///
/// Provides consistent date formatting across the dashboard
use chrono::NaiveDate;

/// Format a calendar date as "Mon D, YYYY"
/// Example: 2023-01-05 -> "Jan 5, 2023"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a calendar date for `<input type="date">` (yyyy-mm-dd)
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
