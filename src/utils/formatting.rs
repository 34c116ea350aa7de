//! Text formatting utilities.
//!
//! This module provides helper functions for formatting values in a human-readable way.

use time::macros::format_description;
use time::Date;

/// How much of a date to spell out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `Dec 14, 2024`
    #[default]
    Medium,
    /// `Saturday, December 14, 2024`
    Full,
}

/// Formats an integer with commas as thousands separators.
///
/// # Examples
/// ```
/// use rstarter::utils::format_number;
///
/// assert_eq!(format_number(1000), "1,000");
/// assert_eq!(format_number(-1234567), "-1,234,567");
/// ```
pub fn format_number(num: i64) -> String {
    let digits = num.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if num < 0 {
        result.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Upper-cases the first character.
///
/// # Examples
/// ```
/// use rstarter::utils::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello world");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cuts `s` to at most `max_chars` characters, appending `suffix` when it was cut.
///
/// # Examples
/// ```
/// use rstarter::utils::truncate;
///
/// assert_eq!(truncate("This is a long string", 10, "..."), "This is a ...");
/// assert_eq!(truncate("short", 10, "..."), "short");
/// ```
pub fn truncate(s: &str, max_chars: usize, suffix: &str) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &s[..cut], suffix),
        None => s.to_string(),
    }
}

/// Formats a calendar date for display.
///
/// # Examples
/// ```
/// use rstarter::utils::{format_date, DateStyle};
/// use time::macros::date;
///
/// assert_eq!(format_date(date!(2024 - 12 - 14), DateStyle::Medium), "Dec 14, 2024");
/// ```
pub fn format_date(date: Date, style: DateStyle) -> String {
    let formatted = match style {
        DateStyle::Medium => date.format(format_description!("[month repr:short] [day padding:none], [year]")),
        DateStyle::Full => date.format(format_description!(
            "[weekday], [month repr:long] [day padding:none], [year]"
        )),
    };
    formatted.unwrap_or_else(|_| date.to_string())
}

/// Formats an ISO `YYYY-MM-DD` date string. Returns None for blank or invalid input.
pub fn format_date_str(input: &str, style: DateStyle) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Date::parse(input, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| format_date(date, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1000), "-1,000");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("dark"), "Dark");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_format_date_styles() {
        let date = time::macros::date!(2024 - 12 - 14);
        assert_eq!(format_date(date, DateStyle::Medium), "Dec 14, 2024");
        assert_eq!(format_date(date, DateStyle::Full), "Saturday, December 14, 2024");
        assert_eq!(format_date(time::macros::date!(2025 - 03 - 05), DateStyle::default()), "Mar 5, 2025");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2024-12-14", DateStyle::Medium).as_deref(), Some("Dec 14, 2024"));
        assert_eq!(format_date_str("  ", DateStyle::Medium), None);
        assert_eq!(format_date_str("2024-13-01", DateStyle::Medium), None);
        assert_eq!(format_date_str("yesterday", DateStyle::Full), None);
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo wörld", 5, "…"), "héllo…");
        assert_eq!(truncate("exact", 5, "..."), "exact");
        assert_eq!(truncate("", 0, "..."), "");
    }
}
