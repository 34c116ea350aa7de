//! Input validation patterns for forms and configuration values.

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic `local@domain.tld` shape.
pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

/// Digits, spaces, dashes and parentheses with an optional leading `+`.
pub static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("Invalid regex pattern"));

/// HTTP or HTTPS URL.
pub static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+").expect("Invalid regex pattern"));

/// ASCII letters and digits only.
pub static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("Invalid regex pattern"));

pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

pub fn is_phone(input: &str) -> bool {
    PHONE.is_match(input)
}

pub fn is_url(input: &str) -> bool {
    URL.is_match(input)
}

pub fn is_alphanumeric(input: &str) -> bool {
    ALPHANUMERIC.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_email("ada@example.com"));
        assert!(!is_email("ada@example"));
        assert!(!is_email("ada lovelace@example.com"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn test_phone() {
        assert!(is_phone("+1 (555) 010-9999"));
        assert!(is_phone("5550109999"));
        assert!(!is_phone("555-CALL-NOW"));
        assert!(!is_phone(""));
    }

    #[test]
    fn test_url_requires_http_scheme() {
        assert!(is_url("http://localhost:3000"));
        assert!(is_url("https://api.example.com/v1"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("https://"));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(!is_alphanumeric("abc_123"));
        assert!(!is_alphanumeric("héllo"));
    }
}
