use std::sync::LazyLock;

use regex::Regex;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ž\s'-]+$").expect("name pattern compiles"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+370 6[0-9]{2} [0-9]{5}$").expect("phone pattern compiles"));

pub const MIN_ADDRESS_LEN: usize = 5;

pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Latin letters (accented range included), spaces, apostrophes and hyphens.
pub fn validate_name(value: &str) -> bool {
    not_empty(value) && NAME_RE.is_match(value)
}

pub fn validate_email(value: &str) -> bool {
    not_empty(value) && EMAIL_RE.is_match(value)
}

pub fn validate_address(value: &str) -> bool {
    value.chars().count() >= MIN_ADDRESS_LEN
}

/// `+370 6XX XXXXX`
pub fn validate_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert!(validate_name("Jonas"));
        assert!(validate_name("Žemaitė"));
        assert!(validate_name("O'Brien-Smith"));
        assert!(validate_name("Anna Maria"));

        assert!(!validate_name(""));
        assert!(!validate_name("   "));
        assert!(!validate_name("R2D2"));
        assert!(!validate_name("john@doe"));
    }

    #[test]
    fn emails() {
        assert!(validate_email("a@b.lt"));
        assert!(validate_email("first.last@mail.example.com"));

        assert!(!validate_email(""));
        assert!(!validate_email("no-at.example.com"));
        assert!(!validate_email("user@nodot"));
        assert!(!validate_email("us er@example.com"));
        assert!(!validate_email("a@@b.lt"));
    }

    #[test]
    fn addresses_count_characters_not_bytes() {
        assert!(validate_address("Vilnius"));
        assert!(validate_address("Šiauliai"));
        assert!(validate_address("ąčęėį"));
        assert!(!validate_address("ąčęė"));
        assert!(!validate_address(""));
    }

    #[test]
    fn phones() {
        assert!(validate_phone("+370 612 34567"));
        assert!(validate_phone("+370 600 00000"));

        assert!(!validate_phone("+370 512 34567"));
        assert!(!validate_phone("+370 612 3456"));
        assert!(!validate_phone("+370 61234567"));
        assert!(!validate_phone("+370 612 345678"));
        assert!(!validate_phone("370 612 34567"));
        assert!(!validate_phone("+370"));
        assert!(!validate_phone("+370 6١٢ ٣٤٥٦٧"));
        assert!(!validate_phone("+370 612 ３４５６７"));
    }
}
