//! Date helper functions
//!
//! Post dates are display strings at month precision ("Nov 2025"). These
//! helpers turn them into real dates for ordering checks and reformat them
//! with Moment.js-style patterns from the site config.

use chrono::NaiveDate;

/// Parse a "Mon YYYY" or "Month YYYY" display date into the first of that month
///
/// # Examples
/// ```ignore
/// parse_month_year("Nov 2025") // -> Some(2025-11-01)
/// ```
pub fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    // %B accepts the abbreviated month name as well when parsing
    NaiveDate::parse_from_str(&format!("1 {}", s), "%d %B %Y").ok()
}

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM YYYY") // -> "November 2025"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Reformat a display date, keeping the original text when it does not parse
pub fn reformat_display_date(display: &str, format: &str) -> String {
    match parse_month_year(display) {
        Some(date) => format_date(&date, format),
        None => display.to_string(),
    }
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each field
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
