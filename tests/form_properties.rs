//! Property tests for the feedback form: phone mask, phone validation and
//! submit gating.

use feedback_arcade::form::{
    phone::mask_phone_input,
    summary::{
        average_rating,
        AverageBand,
    },
    validators::{
        validate_address,
        validate_email,
        validate_name,
        validate_phone,
    },
    FieldKind,
    FormValidator,
};
use proptest::prelude::*;

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

proptest! {
    #[test]
    fn well_formed_numbers_validate(rest in "[0-9]{2}", tail in "[0-9]{5}") {
        let phone = format!("+370 6{rest} {tail}");
        prop_assert!(validate_phone(&phone));
    }

    #[test]
    fn wrong_prefix_never_validates(prefix in "[0-57-9]", rest in "[0-9]{2}", tail in "[0-9]{5}") {
        let phone = format!("+370 {prefix}{rest} {tail}");
        prop_assert!(!validate_phone(&phone));
    }

    #[test]
    fn mask_keeps_prefix_and_digit_limit(raw in "[0-9+ ()a-z-]{0,30}") {
        let masked = mask_phone_input(&raw);
        prop_assert!(masked.starts_with("+370"));
        prop_assert!(digit_count(&masked) <= 11);
        if digit_count(&masked) > 3 {
            prop_assert!(masked.starts_with("+370 "));
        }
    }

    #[test]
    fn mask_is_idempotent(raw in "[0-9 +]{0,20}") {
        let once = mask_phone_input(&raw);
        prop_assert_eq!(mask_phone_input(&once), once);
    }

    #[test]
    fn eight_mobile_digits_mask_into_a_valid_number(digits in "6[0-9]{7}") {
        prop_assert!(validate_phone(&mask_phone_input(&digits)));
    }

    #[test]
    fn submit_gate_matches_field_predicates(
        name in "[A-Za-z]{0,6}|[0-9]{1,3}",
        surname in "[A-Za-z]{0,6}",
        email in "[a-z]{1,4}@[a-z]{1,4}\\.[a-z]{2}|[a-z]{0,5}",
        address in "[a-z ]{0,8}",
        phone in "[0-9]{0,12}",
        message in ".{0,10}",
        ratings in prop::array::uniform3(-5i32..15),
    ) {
        let mut form = FormValidator::new();
        form.input(FieldKind::Name, &name);
        form.input(FieldKind::Surname, &surname);
        form.input(FieldKind::Email, &email);
        form.input(FieldKind::Address, &address);
        form.input(FieldKind::Phone, &phone);
        form.input(FieldKind::Message, &message);
        for (index, rating) in ratings.into_iter().enumerate() {
            form.set_rating(index, rating);
        }

        let masked = mask_phone_input(&phone);
        let expected = validate_name(name.trim())
            && validate_name(surname.trim())
            && validate_email(email.trim())
            && validate_address(address.trim())
            && validate_phone(&masked);

        prop_assert_eq!(form.submit_control().enabled, expected);
    }

    #[test]
    fn average_band_follows_rounded_mean(ratings in prop::array::uniform3(1i32..=10)) {
        let average = average_rating(ratings);
        let sum: i32 = ratings.iter().sum();
        prop_assert!((average - f64::from(sum) / 3.0).abs() <= 0.05 + f64::EPSILON);

        let band = AverageBand::of(average);
        let expected = if average < 4.0 {
            AverageBand::Low
        } else if average < 7.0 {
            AverageBand::Medium
        } else {
            AverageBand::High
        };
        prop_assert_eq!(band, expected);
    }
}
