//! Live mask for the phone field: `+370 6XX XXXXX`.

pub const COUNTRY_CODE: &str = "370";
pub const MAX_DIGITS: usize = 11;

/// Reshapes whatever is currently in the field into the national format.
///
/// Never rejects: partial input yields a partial mask that simply fails
/// validation until it is complete.
pub fn mask_phone_input(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if !digits.starts_with(COUNTRY_CODE) {
        digits.insert_str(0, COUNTRY_CODE);
    }
    digits.truncate(MAX_DIGITS);

    let mut formatted = format!("+{COUNTRY_CODE}");
    if digits.len() > 3 {
        formatted.push(' ');
        formatted.push_str(&digits[3..4]);
    }
    if digits.len() > 4 {
        formatted.push_str(&digits[4..digits.len().min(6)]);
    }
    if digits.len() > 6 {
        formatted.push(' ');
        formatted.push_str(&digits[6..]);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_just_the_country_code() {
        assert_eq!(mask_phone_input(""), "+370");
        assert_eq!(mask_phone_input("+370"), "+370");
        assert_eq!(mask_phone_input("abc"), "+370");
    }

    #[test]
    fn grows_while_typing() {
        assert_eq!(mask_phone_input("+3706"), "+370 6");
        assert_eq!(mask_phone_input("+370 61"), "+370 61");
        assert_eq!(mask_phone_input("+370 612"), "+370 612");
        assert_eq!(mask_phone_input("+370 6123"), "+370 612 3");
        assert_eq!(mask_phone_input("+370 612 34567"), "+370 612 34567");
    }

    #[test]
    fn prepends_country_code_to_bare_numbers() {
        assert_eq!(mask_phone_input("61234567"), "+370 612 34567");
        assert_eq!(mask_phone_input("(612) 34-567"), "+370 612 34567");
    }

    #[test]
    fn truncates_extra_digits() {
        assert_eq!(mask_phone_input("+370 612 345678999"), "+370 612 34567");
        assert_eq!(mask_phone_input("3706123456789"), "+370 612 34567");
    }

    #[test]
    fn backspacing_over_the_space_keeps_the_mask() {
        assert_eq!(mask_phone_input("+370 612"), "+370 612");
        assert_eq!(mask_phone_input("+370 61"), "+370 61");
        assert_eq!(mask_phone_input("+370 "), "+370");
    }
}
