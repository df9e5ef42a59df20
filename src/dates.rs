// =============================================================================
// dates.rs — THE CALENDAR WHISPERER
// =============================================================================
//
// The site renders sitting dates as prose: "Thursday, 12th June, 2025".
// Comma placement varies. Ordinal suffixes come and go. The bills table
// uses "17-08-2017" instead, because consistency across two pages of the
// same website was apparently too much to ask.
//
// Everything in here terminates in a usable value. A date that resists
// every parse becomes today's date with weekday "Unknown" — the one
// sentinel the frontend knows how to render. No function in this module
// returns an error or panics.
// =============================================================================

use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;

/// Normalized form of a free-text date cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    /// YYYY-MM-DD, always a real calendar date.
    pub formatted_date: String,
    /// Title-cased English weekday name, or "Unknown".
    pub day_of_week: String,
}

/// The prose format the documents tables use:
/// "<Weekday>day, <day><st|nd|rd|th?> <Month>, <year>", commas tolerant.
static SITE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\w+day),?\s+(\d{1,2})(?:st|nd|rd|th)?\s+(\w+),?\s+(\d{4})")
        .expect("site date pattern is invalid somehow")
});

/// The numeric format the bills table uses: "DD-MM-YYYY".
static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})-(\d{1,2})-(\d{4})").expect("numeric date pattern is invalid somehow")
});

/// Formats the secondary parse path will attempt, in order. This stands in
/// for JavaScript's anything-goes `new Date(...)` — scoped to the shapes
/// the site and our fallback data actually produce.
const FLEXIBLE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// Normalize a prose date cell into ISO date + weekday.
///
/// Primary path: the site's own format, matched by pattern. The weekday is
/// taken from the text (first letter uppercased), not recomputed — the site
/// is the authority on what day it thinks it sat.
///
/// Secondary path: flexible calendar parsing, weekday derived from the
/// parsed date.
///
/// Terminal path: today's date, weekday "Unknown".
pub fn normalize(date_str: &str) -> NormalizedDate {
    if let Some(caps) = SITE_DATE.captures(date_str) {
        let weekday = &caps[1];
        let day: u32 = caps[2].parse().unwrap_or(0);
        let month = month_number(&caps[3]);
        let year: i32 = caps[4].parse().unwrap_or(0);

        if let Some(month) = month {
            // A matched day/month pair still has to be a real calendar
            // date; "99th June" falls through to the flexible path.
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return NormalizedDate {
                    formatted_date: date.format("%Y-%m-%d").to_string(),
                    day_of_week: capitalize_first(weekday),
                };
            }
        }
    }

    if let Some(date) = parse_flexible(date_str) {
        return NormalizedDate {
            formatted_date: date.format("%Y-%m-%d").to_string(),
            day_of_week: date.format("%A").to_string(),
        };
    }

    NormalizedDate {
        formatted_date: today_iso(),
        day_of_week: "Unknown".to_string(),
    }
}

/// Normalize a numeric "DD-MM-YYYY" cell (bills table) into YYYY-MM-DD.
/// Same terminal behavior as `normalize`: unparseable input becomes today.
pub fn normalize_numeric(date_str: &str) -> String {
    if let Some(caps) = NUMERIC_DATE.captures(date_str) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let year: i32 = caps[3].parse().unwrap_or(0);
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    if let Some(date) = parse_flexible(date_str) {
        return date.format("%Y-%m-%d").to_string();
    }

    today_iso()
}

/// Parse an ISO date that is already known to be well-formed, e.g. our own
/// `formatted_date` output. Returns None for anything else — callers use
/// this for date arithmetic, not normalization.
pub fn parse_iso(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

fn parse_flexible(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return None;
    }
    FLEXIBLE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// English month name → month number. Full names only, matching the
/// twelve keys the site's prose dates use.
fn month_number(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_format_with_ordinal_suffix() {
        let result = normalize("Thursday, 12th June, 2025");
        assert_eq!(result.formatted_date, "2025-06-12");
        assert_eq!(result.day_of_week, "Thursday");
    }

    #[test]
    fn test_site_format_without_suffix_or_commas() {
        let result = normalize("Tuesday 25 January 2022");
        assert_eq!(result.formatted_date, "2022-01-25");
        assert_eq!(result.day_of_week, "Tuesday");
    }

    #[test]
    fn test_lowercase_weekday_is_capitalized() {
        let result = normalize("monday, 3rd february, 2025");
        assert_eq!(result.formatted_date, "2025-02-03");
        assert_eq!(result.day_of_week, "Monday");
    }

    #[test]
    fn test_single_digit_day_is_zero_padded() {
        let result = normalize("Wednesday, 5th March, 2025");
        assert_eq!(result.formatted_date, "2025-03-05");
    }

    #[test]
    fn test_impossible_day_falls_through_to_unknown() {
        // "99th June" matches the pattern but is not a calendar date, and
        // nothing else in the string parses either.
        let result = normalize("Friday, 99th June, 2025");
        assert_eq!(result.day_of_week, "Unknown");
        assert!(parse_iso(&result.formatted_date).is_some());
    }

    #[test]
    fn test_unknown_month_falls_through() {
        let result = normalize("Friday, 12th Juny, 2025");
        assert_eq!(result.day_of_week, "Unknown");
    }

    #[test]
    fn test_flexible_iso_input_derives_weekday() {
        let result = normalize("2025-06-12");
        assert_eq!(result.formatted_date, "2025-06-12");
        assert_eq!(result.day_of_week, "Thursday");
    }

    #[test]
    fn test_flexible_long_month_form() {
        let result = normalize("June 12, 2025");
        assert_eq!(result.formatted_date, "2025-06-12");
        assert_eq!(result.day_of_week, "Thursday");
    }

    #[test]
    fn test_garbage_becomes_today_and_unknown() {
        let result = normalize("not a date");
        assert_eq!(result.day_of_week, "Unknown");
        // Whatever today is, it must be a syntactically valid ISO date.
        assert!(parse_iso(&result.formatted_date).is_some());
    }

    #[test]
    fn test_numeric_bills_format() {
        assert_eq!(normalize_numeric("17-08-2017"), "2017-08-17");
        assert_eq!(normalize_numeric("3-6-2025"), "2025-06-03");
    }

    #[test]
    fn test_numeric_garbage_becomes_today() {
        let result = normalize_numeric("pending");
        assert!(parse_iso(&result).is_some());
    }

    #[test]
    fn test_never_empty_output() {
        for input in ["", "   ", "Date", "—"] {
            let result = normalize(input);
            assert!(!result.formatted_date.is_empty());
            assert!(!result.day_of_week.is_empty());
        }
    }
}
