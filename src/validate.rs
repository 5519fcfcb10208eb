//! Input validators for user-supplied identifiers.
//!
//! Both patterns are compiled on first use and shared for the life of the
//! process.

use std::sync::OnceLock;

use regex::Regex;

/// Longest email address accepted, in bytes.
const MAX_EMAIL_LEN: usize = 254;

/// Email syntax: printable local part, `@`, dot-separated domain labels of
/// 1-63 alphanumeric/hyphen characters that do not start or end with a hyphen.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// Unicode letters (category L) and numbers (category N) only.
const ALPHANUMERIC_PATTERN: &str = r"^[\p{L}\p{N}]*$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn alphanumeric_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ALPHANUMERIC_PATTERN).expect("alphanumeric pattern compiles"))
}

/// Returns `true` if `email` is at most 254 bytes and syntactically valid.
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LEN && email_regex().is_match(email)
}

/// Returns `true` if every character is a Unicode letter or number.
///
/// The empty string is accepted.
pub fn is_alphanumeric(s: &str) -> bool {
    alphanumeric_regex().is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
        assert!(is_valid_email("o'brien@example.org"));
        assert!(is_valid_email("admin@localhost"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example-.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@exa_mple.com"));
    }

    #[test]
    fn label_length_limit_is_63() {
        let ok = format!("u@{}.com", "a".repeat(63));
        let too_long = format!("u@{}.com", "a".repeat(64));
        assert!(is_valid_email(&ok));
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn total_length_limit_is_254_bytes() {
        // 242 + "@example.com" (12) = 254
        let at_limit = format!("{}@example.com", "a".repeat(242));
        let over_limit = format!("{}@example.com", "a".repeat(243));
        assert!(is_valid_email(&at_limit));
        assert!(!is_valid_email(&over_limit));
        assert!(!is_valid_email(&format!("{}@x.com", "a".repeat(255))));
    }

    #[test]
    fn alphanumeric_ascii() {
        assert!(is_alphanumeric("abc123"));
        assert!(is_alphanumeric("ABCxyz"));
        assert!(!is_alphanumeric("abc 123"));
        assert!(!is_alphanumeric("abc-123"));
        assert!(!is_alphanumeric("abc_123"));
    }

    #[test]
    fn alphanumeric_empty_is_true() {
        assert!(is_alphanumeric(""));
    }

    #[test]
    fn alphanumeric_unicode_letters_and_numbers() {
        assert!(is_alphanumeric("héllo"));
        assert!(is_alphanumeric("Ωmega"));
        assert!(is_alphanumeric("日本語"));
        assert!(is_alphanumeric("٣٤٥"));
        assert!(is_alphanumeric("Ⅻ"));
        assert!(is_alphanumeric("½"));
        assert!(!is_alphanumeric("tab\there"));
        assert!(!is_alphanumeric("emoji🙂"));
    }

    #[test]
    fn alphanumeric_rejects_trailing_newline() {
        assert!(!is_alphanumeric("abc\n"));
    }
}
