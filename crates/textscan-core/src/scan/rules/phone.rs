//! Phone number validation.

/// Minimum and maximum digit count of a plausible phone number.
pub const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=13;

/// Count the digits of a phone number, ignoring `+`, parentheses and separators.
pub fn count_digits(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Check that a phone number has between 7 and 13 digits.
pub fn validate_phone(s: &str) -> bool {
    PHONE_DIGITS.contains(&count_digits(s))
}
